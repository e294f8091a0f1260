//! Resolution of image source strings into drawables.

use std::path::PathBuf;

use drawee_core::{Drawable, DraweeError, HostResources, Result};
use drawee_path::{ImageSource, ResourceUri};

/// The outcome of resolving one source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Outside the file-or-resource grammar; left to the image pipeline.
    Remote,
    /// A bundled resource, `None` when the name is unknown.
    Resource(Option<Drawable>),
    /// A local file, `None` when it could not be decoded.
    File(Option<Drawable>),
}

impl Resolution {
    /// The resolved drawable, if any.
    #[must_use]
    pub fn into_drawable(self) -> Option<Drawable> {
        match self {
            Self::Remote => None,
            Self::Resource(drawable) | Self::File(drawable) => drawable,
        }
    }
}

/// Turns source strings into drawables using the host's resources.
#[derive(Debug)]
pub struct ResourceResolver<'a, H: ?Sized> {
    host: &'a H,
}

impl<'a, H: HostResources + ?Sized> ResourceResolver<'a, H> {
    /// Creates a resolver over `host`.
    pub const fn new(host: &'a H) -> Self {
        Self { host }
    }

    /// Classifies and resolves `source`.
    ///
    /// Checks run in order: remote, bundled resource, local file.
    ///
    /// # Errors
    ///
    /// Returns [`DraweeError::InvalidPath`] if a source reaching the local file
    /// branch does not satisfy the path grammar.
    pub fn resolve(&self, source: &str) -> Result<Resolution> {
        if !self.host.is_file_or_resource_path(source) {
            tracing::trace!(source, "leaving remote source to the pipeline");
            return Ok(Resolution::Remote);
        }

        let parsed = self.parse(source)?;
        if let Some(name) = parsed.resource_name() {
            return Ok(Resolution::Resource(self.resource(name)));
        }

        let path = self.local_path(&parsed)?;
        let drawable = self.host.decode_file(&path);
        if drawable.is_none() {
            tracing::debug!("could not decode image file {}", path.display());
        }
        Ok(Resolution::File(drawable))
    }

    /// Resolves `source` to a drawable; remote sources yield `None`.
    ///
    /// # Errors
    ///
    /// See [`ResourceResolver::resolve`].
    pub fn drawable(&self, source: &str) -> Result<Option<Drawable>> {
        self.resolve(source).map(Resolution::into_drawable)
    }

    /// Looks up the pipeline URI of a bundled resource by name.
    #[must_use]
    pub fn resource_uri(&self, name: &str) -> Option<ResourceUri> {
        ResourceUri::from_identifier(self.host.drawable_identifier(name))
    }

    /// Rewrites a local file source to an absolute path.
    ///
    /// App-relative sources are joined onto the application root.
    ///
    /// # Errors
    ///
    /// Returns [`DraweeError::InvalidPath`] if `source` is not a local file path.
    pub fn file_path(&self, source: &str) -> Result<PathBuf> {
        if !self.host.is_file_or_resource_path(source) {
            return Err(DraweeError::InvalidPath(source.to_string()));
        }
        self.local_path(&self.parse(source)?)
    }

    fn parse(&self, source: &str) -> Result<ImageSource> {
        self.host
            .path_grammar()
            .parse(source.to_string())
            .map_err(|error| {
                tracing::debug!("rejecting image source {source:?}: {error}");
                DraweeError::InvalidPath(source.to_string())
            })
    }

    fn local_path(&self, source: &ImageSource) -> Result<PathBuf> {
        tracing::trace!(kind = ?source.kind(), "resolving local image source {source}");
        source
            .to_file_path(&self.host.app_root())
            .ok_or_else(|| DraweeError::InvalidPath(source.to_string()))
    }

    fn resource(&self, name: &str) -> Option<Drawable> {
        let Some(uri) = self.resource_uri(name) else {
            tracing::debug!("no drawable resource named {name:?}");
            return None;
        };
        self.host.load_resource(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::MockHost;

    #[test]
    fn test_remote_passes_through() {
        let host = MockHost::new();
        let resolver = ResourceResolver::new(&host);
        assert_eq!(
            resolver.resolve("http://example.com/a.png"),
            Ok(Resolution::Remote)
        );
        assert!(host.decoded_paths().is_empty());
    }

    #[test]
    fn test_resource_found() {
        let host = MockHost::new().with_resource("logo", 2_131_165_184);
        let resolver = ResourceResolver::new(&host);

        let drawable = resolver.drawable("res://logo").unwrap().unwrap();
        assert_eq!(
            drawable.origin(),
            &drawee_core::DrawableOrigin::Resource(ResourceUri::from_identifier(2_131_165_184).unwrap())
        );
    }

    #[test]
    fn test_resource_missing_or_zero_is_silent() {
        let host = MockHost::new().with_resource("zero", 0);
        let resolver = ResourceResolver::new(&host);

        assert_eq!(resolver.resolve("res://zero"), Ok(Resolution::Resource(None)));
        assert_eq!(resolver.resolve("res://unknown"), Ok(Resolution::Resource(None)));
    }

    #[test]
    fn test_app_relative_path_is_rewritten_before_decode() {
        let host = MockHost::new().with_file("/app/root/images/a.png");
        let resolver = ResourceResolver::new(&host);

        assert_eq!(
            resolver.file_path("~/images/a.png"),
            Ok(PathBuf::from("/app/root/images/a.png"))
        );
        assert!(resolver.drawable("~/images/a.png").unwrap().is_some());
        assert_eq!(host.decoded_paths(), vec![PathBuf::from("/app/root/images/a.png")]);
    }

    #[test]
    fn test_app_relative_path_cannot_escape_root() {
        let host = MockHost::new();
        let resolver = ResourceResolver::new(&host);

        let path = resolver.file_path("~//etc/passwd").unwrap();
        assert!(path.starts_with("/app/root"), "escaped to {}", path.display());
        assert_eq!(path, PathBuf::from("/app/root/etc/passwd"));

        assert_eq!(resolver.resolve("~//etc/passwd"), Ok(Resolution::File(None)));
        assert_eq!(host.decoded_paths(), vec![PathBuf::from("/app/root/etc/passwd")]);
    }

    #[test]
    fn test_bare_app_relative_marker_is_invalid() {
        let host = MockHost::new();
        let resolver = ResourceResolver::new(&host);
        assert_eq!(
            resolver.resolve("~/"),
            Err(DraweeError::InvalidPath("~/".into()))
        );
        assert!(host.decoded_paths().is_empty());
    }

    #[test]
    fn test_missing_file_is_silent() {
        let host = MockHost::new();
        let resolver = ResourceResolver::new(&host);
        assert_eq!(resolver.resolve("/not/a/real/file.png"), Ok(Resolution::File(None)));
    }

    #[test]
    fn test_file_path_guard() {
        let host = MockHost::new();
        let resolver = ResourceResolver::new(&host);
        assert_eq!(
            resolver.file_path("images/a.png"),
            Err(DraweeError::InvalidPath("images/a.png".into()))
        );
        assert_eq!(
            resolver.file_path("res://logo"),
            Err(DraweeError::InvalidPath("res://logo".into()))
        );
    }

    #[test]
    fn test_host_grammar_is_respected() {
        let host = MockHost::new()
            .with_grammar(drawee_path::PathGrammar::new("asset:", "@/"))
            .with_resource("logo", 7)
            .with_file("/app/root/a.png");
        let resolver = ResourceResolver::new(&host);

        assert!(resolver.drawable("asset:logo").unwrap().is_some());
        assert!(resolver.drawable("@/a.png").unwrap().is_some());
        assert_eq!(resolver.resolve("res://logo"), Ok(Resolution::Remote));
    }
}
