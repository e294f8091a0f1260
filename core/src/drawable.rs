//! Opaque handles to platform-renderable image content.

use core::any::Any;
use core::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use drawee_path::ResourceUri;

/// Where a drawable was resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DrawableOrigin {
    /// Decoded from a file on disk.
    File(PathBuf),
    /// Loaded from a bundled resource.
    Resource(ResourceUri),
}

/// A handle to image content the platform can render.
///
/// The content itself belongs to the host; `Drawable` only carries it around.
/// Clones share the same content, and two drawables compare equal only when
/// they share content.
#[derive(Clone)]
pub struct Drawable {
    origin: DrawableOrigin,
    content: Arc<dyn Any + Send + Sync>,
}

impl Drawable {
    /// Wraps host content resolved from `origin`.
    pub fn new<T: Any + Send + Sync>(origin: DrawableOrigin, content: T) -> Self {
        Self {
            origin,
            content: Arc::new(content),
        }
    }

    /// Where this drawable came from.
    #[must_use]
    pub const fn origin(&self) -> &DrawableOrigin {
        &self.origin
    }

    /// Returns the host content if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.content.downcast_ref()
    }
}

impl PartialEq for Drawable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.content, &other.content)
    }
}

impl Eq for Drawable {}

impl fmt::Debug for Drawable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawable")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
