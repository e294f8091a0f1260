//! Errors raised by drawee property setters.

use thiserror::Error;

/// Errors surfaced synchronously to the caller of a property setter.
///
/// Lookup misses, decode failures and unknown scale types are not errors;
/// they leave the drawee unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraweeError {
    /// A string routed to local resolution does not match the file-or-resource grammar.
    #[error("Path \"{0}\" is not a valid file or resource.")]
    InvalidPath(String),
}

/// Result alias for drawee operations.
pub type Result<T, E = DraweeError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_display() {
        let error = DraweeError::InvalidPath("images/a.png".into());
        assert_eq!(
            error.to_string(),
            "Path \"images/a.png\" is not a valid file or resource."
        );
    }
}
