//! Traits the drawee core needs from the host platform.
//!
//! The core never touches a platform object directly. A backend implements:
//!
//! - [`PlatformView`] for the native view that renders one drawee,
//! - [`HostResources`] for the application's resource table and file access,
//! - [`ImagePipeline`] for the wrapped image-loading library.

use core::any::Any;
use core::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use drawee_path::{PathGrammar, ResourceUri};

use crate::{Drawable, Hierarchy};

/// A native view with an attachable image and an installable hierarchy.
///
/// The view owns the installed hierarchy for as long as it renders it; a new
/// installation supersedes the previous one.
pub trait PlatformView {
    /// Sets the primary image content, or clears it with `None`.
    fn attach_image(&mut self, image: Option<Drawable>);

    /// Replaces the view's hierarchy.
    fn install_hierarchy(&mut self, hierarchy: Hierarchy);
}

/// The host application's resource table and local file access.
pub trait HostResources {
    /// The path syntax that separates local sources from remote ones.
    fn path_grammar(&self) -> &PathGrammar {
        PathGrammar::standard()
    }

    /// Returns true if `path` is a local file or a bundled resource reference.
    fn is_file_or_resource_path(&self, path: &str) -> bool {
        self.path_grammar().is_file_or_resource_path(path)
    }

    /// The application root that app-relative paths are joined onto.
    fn app_root(&self) -> PathBuf;

    /// Returns false while the resource table cannot be queried.
    fn has_resources(&self) -> bool {
        true
    }

    /// Looks up a drawable resource by name; zero or below means "not found".
    fn drawable_identifier(&self, name: &str) -> i32;

    /// Loads the drawable addressed by a resource URI.
    fn load_resource(&self, uri: ResourceUri) -> Option<Drawable>;

    /// Decodes a drawable from an absolute file path.
    fn decode_file(&self, path: &Path) -> Option<Drawable>;
}

/// The wrapped image pipeline.
///
/// Remote sources are handed to the pipeline together with the view they
/// render into; the pipeline then drives placeholder, fade and scale itself.
pub trait ImagePipeline {
    /// The view type the pipeline renders into.
    type View: PlatformView;

    /// One-time, process-wide setup.
    fn initialize(&self, context: &PlatformContext);

    /// Starts loading `uri` into `view`.
    fn load(&self, view: &mut Self::View, uri: &str);

    /// Releases process-wide pipeline state.
    fn shutdown(&self) {}
}

/// An opaque handle to the platform context the pipeline is initialized with,
/// such as an Android application context.
#[derive(Clone)]
pub struct PlatformContext {
    native: Arc<dyn Any + Send + Sync>,
}

impl PlatformContext {
    /// Wraps a platform context handle.
    pub fn new<T: Any + Send + Sync>(native: T) -> Self {
        Self {
            native: Arc::new(native),
        }
    }

    /// Returns the native handle if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.native.downcast_ref()
    }
}

impl fmt::Debug for PlatformContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformContext").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Resources;

    impl HostResources for Resources {
        fn app_root(&self) -> PathBuf {
            PathBuf::from("/app")
        }
        fn drawable_identifier(&self, _name: &str) -> i32 {
            0
        }
        fn load_resource(&self, _uri: ResourceUri) -> Option<Drawable> {
            None
        }
        fn decode_file(&self, _path: &Path) -> Option<Drawable> {
            None
        }
    }

    #[test]
    fn test_default_grammar() {
        let resources = Resources;
        assert!(resources.has_resources());
        assert!(resources.is_file_or_resource_path("res://logo"));
        assert!(resources.is_file_or_resource_path("~/a.png"));
        assert!(resources.is_file_or_resource_path("/a.png"));
        assert!(!resources.is_file_or_resource_path("https://example.com/a.png"));
    }

    #[test]
    fn test_platform_context_downcast() {
        let context = PlatformContext::new(String::from("app-context"));
        assert_eq!(context.downcast_ref::<String>().map(String::as_str), Some("app-context"));
        assert!(context.downcast_ref::<u32>().is_none());
    }
}
