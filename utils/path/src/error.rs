//! Rejections of malformed image sources.

use core::fmt;

/// Why a source string could not be turned into an [`ImageSource`](crate::ImageSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Nothing but whitespace.
    Empty,
    /// The app-relative marker with no file name after it, e.g. `~/`.
    MissingFileName,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "image source is empty",
            Self::MissingFileName => "app-relative image source names no file",
        })
    }
}

impl std::error::Error for ParseError {}
