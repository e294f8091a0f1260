//! # Drawee image sources
//!
//! This crate classifies the strings handed to a drawee's image properties.
//! A source is either a **remote** URI that the image pipeline fetches on its
//! own, a **bundled resource** addressed by name behind a resource prefix, or
//! a **local file** given as an absolute path or relative to the application
//! root.
//!
//! ```
//! use std::path::Path;
//! use drawee_path::{PathGrammar, SourceKind};
//!
//! let grammar = PathGrammar::standard();
//! let logo = grammar.parse("res://logo")?;
//! assert_eq!(logo.kind(), SourceKind::Resource);
//! assert_eq!(logo.resource_name(), Some("logo"));
//!
//! let photo = grammar.parse("~/images/photo.png")?;
//! assert_eq!(
//!     photo.to_file_path(Path::new("/app")).as_deref(),
//!     Some(Path::new("/app/images/photo.png"))
//! );
//! assert_eq!(grammar.parse("https://example.com/a.png")?.kind(), SourceKind::Remote);
//! # Ok::<(), drawee_path::ParseError>(())
//! ```

mod error;
mod parser;

pub use error::ParseError;

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix that marks a bundled resource reference, e.g. `res://logo`.
pub const RESOURCE_PREFIX: &str = "res://";

/// Marker for paths relative to the application root, e.g. `~/images/a.png`.
pub const APP_RELATIVE_MARKER: &str = "~/";

/// URI scheme the image pipeline uses for resources addressed by identifier.
pub const LOCAL_RESOURCE_SCHEME: &str = "res";

/// Returns true if `path` matches the default file-or-resource grammar.
///
/// ```
/// assert!(drawee_path::is_file_or_resource_path("~/a.png"));
/// assert!(!drawee_path::is_file_or_resource_path("http://a/b.png"));
/// ```
#[must_use]
pub const fn is_file_or_resource_path(path: &str) -> bool {
    parser::is_file_or_resource(
        path.as_bytes(),
        RESOURCE_PREFIX.as_bytes(),
        APP_RELATIVE_MARKER.as_bytes(),
    )
}

/// Byte range of the meaningful part of a source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub(crate) const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SourceComponents {
    kind: SourceKind,
    /// Everything after the resource prefix or app-relative marker
    body: Span,
}

/// The kind of an image source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Anything outside the file-or-resource grammar; fetched by the pipeline.
    Remote,
    /// A drawable bundled with the application, looked up by name.
    Resource,
    /// A file below the application root.
    AppRelative,
    /// A file given by absolute path.
    Absolute,
}

static STANDARD_GRAMMAR: PathGrammar = PathGrammar::DEFAULT;

/// The path syntax that separates local sources from remote ones.
///
/// Hosts own the exact prefix and marker; [`PathGrammar::default`] uses
/// [`RESOURCE_PREFIX`] and [`APP_RELATIVE_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathGrammar {
    resource_prefix: Cow<'static, str>,
    app_relative_marker: Cow<'static, str>,
}

impl PathGrammar {
    /// The grammar built from the crate constants.
    pub const DEFAULT: Self = Self {
        resource_prefix: Cow::Borrowed(RESOURCE_PREFIX),
        app_relative_marker: Cow::Borrowed(APP_RELATIVE_MARKER),
    };

    /// A shared reference to [`PathGrammar::DEFAULT`].
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_GRAMMAR
    }

    /// Creates a grammar with a custom resource prefix and app-relative marker.
    pub fn new(
        resource_prefix: impl Into<Cow<'static, str>>,
        app_relative_marker: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            resource_prefix: resource_prefix.into(),
            app_relative_marker: app_relative_marker.into(),
        }
    }

    /// The reserved prefix of bundled resource references.
    #[must_use]
    pub fn resource_prefix(&self) -> &str {
        &self.resource_prefix
    }

    /// The marker of app-relative paths.
    #[must_use]
    pub fn app_relative_marker(&self) -> &str {
        &self.app_relative_marker
    }

    /// Returns true if `path` is a local file or a bundled resource reference.
    #[must_use]
    pub fn is_file_or_resource_path(&self, path: &str) -> bool {
        parser::is_file_or_resource(
            path.as_bytes(),
            self.resource_prefix.as_bytes(),
            self.app_relative_marker.as_bytes(),
        )
    }

    /// Parses `source` into an owned [`ImageSource`] under this grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Empty`] if `source` is only whitespace, and
    /// [`ParseError::MissingFileName`] if nothing follows the app-relative
    /// marker.
    pub fn parse(&self, source: impl Into<Cow<'static, str>>) -> Result<ImageSource, ParseError> {
        let inner = source.into();
        if inner.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        let components = parser::classify(
            inner.as_bytes(),
            self.resource_prefix.as_bytes(),
            self.app_relative_marker.as_bytes(),
        );
        let source = ImageSource { inner, components };
        if components.kind == SourceKind::AppRelative && source.file_suffix().is_empty() {
            return Err(ParseError::MissingFileName);
        }
        Ok(source)
    }
}

impl Default for PathGrammar {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A classified image source string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageSource {
    inner: Cow<'static, str>,
    components: SourceComponents,
}

impl ImageSource {
    /// The kind of this source.
    #[must_use]
    pub const fn kind(&self) -> SourceKind {
        self.components.kind
    }

    /// Returns the original string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    fn body(&self) -> &str {
        let Span { start, end } = self.components.body;
        self.inner.get(start..end).unwrap_or_default()
    }

    /// The app-relative part, trimmed and with leading separators removed so
    /// it can only ever be joined below the application root.
    fn file_suffix(&self) -> &str {
        self.body().trim().trim_start_matches('/')
    }

    /// The resource name with the prefix stripped, for resource sources.
    #[must_use]
    pub fn resource_name(&self) -> Option<&str> {
        (self.components.kind == SourceKind::Resource).then(|| self.body())
    }

    /// Resolves a local file source to an absolute path.
    ///
    /// App-relative sources are joined onto `app_root`, never replacing it.
    /// Surrounding whitespace is dropped. Returns `None` for remote and
    /// resource sources.
    #[must_use]
    pub fn to_file_path(&self, app_root: &Path) -> Option<PathBuf> {
        match self.components.kind {
            SourceKind::AppRelative => Some(app_root.join(self.file_suffix())),
            SourceKind::Absolute => Some(PathBuf::from(self.body().trim())),
            SourceKind::Remote | SourceKind::Resource => None,
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl AsRef<str> for ImageSource {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A pipeline URI addressing a bundled resource by numeric identifier.
///
/// ```
/// use drawee_path::ResourceUri;
///
/// let uri = ResourceUri::from_identifier(42).unwrap();
/// assert_eq!(uri.to_string(), "res:///42");
/// assert!(ResourceUri::from_identifier(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceUri {
    identifier: u32,
}

impl ResourceUri {
    /// Builds a resource URI; identifiers of zero or below mean "not found".
    #[must_use]
    pub fn from_identifier(identifier: i32) -> Option<Self> {
        u32::try_from(identifier)
            .ok()
            .filter(|id| *id > 0)
            .map(|identifier| Self { identifier })
    }

    /// The numeric resource identifier.
    #[must_use]
    pub const fn identifier(&self) -> u32 {
        self.identifier
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LOCAL_RESOURCE_SCHEME}:///{}", self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &'static str) -> ImageSource {
        PathGrammar::standard().parse(source).unwrap()
    }

    #[test]
    fn test_source_kinds() {
        assert_eq!(parse("res://icon").kind(), SourceKind::Resource);
        assert_eq!(parse("/data/icon.png").kind(), SourceKind::Absolute);
        assert_eq!(parse("~/icon.png").kind(), SourceKind::AppRelative);
        assert_eq!(parse("https://example.com/icon.png").kind(), SourceKind::Remote);
    }

    #[test]
    fn test_parse_errors() {
        let grammar = PathGrammar::standard();
        assert_eq!(grammar.parse(""), Err(ParseError::Empty));
        assert_eq!(grammar.parse("   "), Err(ParseError::Empty));
        assert_eq!(grammar.parse("~/"), Err(ParseError::MissingFileName));
        assert_eq!(grammar.parse("~/ //"), Err(ParseError::MissingFileName));
    }

    #[test]
    fn test_resource_name() {
        assert_eq!(parse("res://splash_logo").resource_name(), Some("splash_logo"));
        assert_eq!(parse("/splash_logo.png").resource_name(), None);
    }

    #[test]
    fn test_app_relative_rewrite() {
        let path = parse("~/images/photo.png").to_file_path(Path::new("/app/root"));
        assert_eq!(path, Some(PathBuf::from("/app/root/images/photo.png")));
    }

    #[test]
    fn test_app_relative_stays_below_root() {
        let root = Path::new("/app/root");
        for source in ["~//etc/passwd", "~/ /etc/passwd", "~////etc/passwd"] {
            let path = parse(source).to_file_path(root).unwrap();
            assert_eq!(path, PathBuf::from("/app/root/etc/passwd"), "Failed for: {source}");
        }
    }

    #[test]
    fn test_whitespace_trimmed() {
        let path = parse("/tmp/photo.png  ").to_file_path(Path::new("/unused"));
        assert_eq!(path, Some(PathBuf::from("/tmp/photo.png")));
    }

    #[test]
    fn test_remote_has_no_file_path() {
        assert_eq!(parse("http://example.com/a.png").to_file_path(Path::new("/app")), None);
        assert_eq!(parse("res://logo").to_file_path(Path::new("/app")), None);
    }

    #[test]
    fn test_custom_grammar() {
        let grammar = PathGrammar::new("asset:", "@/");
        assert!(grammar.is_file_or_resource_path("asset:logo"));
        assert!(grammar.is_file_or_resource_path("@/a.png"));
        assert!(!grammar.is_file_or_resource_path("res://logo"));
        assert!(!grammar.is_file_or_resource_path("~/a.png"));

        let source = grammar.parse("asset:logo").unwrap();
        assert_eq!(source.resource_name(), Some("logo"));
        assert_eq!(grammar.parse("res://logo").unwrap().kind(), SourceKind::Remote);
    }

    #[test]
    fn test_resource_uri() {
        assert_eq!(
            ResourceUri::from_identifier(2_131_165_184).map(|uri| uri.to_string()),
            Some("res:///2131165184".to_string())
        );
        assert_eq!(ResourceUri::from_identifier(0), None);
        assert_eq!(ResourceUri::from_identifier(-7), None);
    }
}
