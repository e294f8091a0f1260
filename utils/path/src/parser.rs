//! Const-compatible classification of image source strings.
//!
//! All functions work on bytes so that sources built from static strings can be
//! classified at compile time.

use crate::{SourceComponents, SourceKind, Span};

/// Classifies `bytes` against a resource prefix and an app-relative marker.
///
/// The checks run in a fixed order: resource prefix, app-relative marker,
/// absolute path. Anything else is remote and left for the image pipeline.
pub const fn classify(bytes: &[u8], resource_prefix: &[u8], app_marker: &[u8]) -> SourceComponents {
    let len = bytes.len();

    if !resource_prefix.is_empty() && starts_with(bytes, resource_prefix) {
        return SourceComponents {
            kind: SourceKind::Resource,
            body: Span::new(resource_prefix.len(), len),
        };
    }

    if !app_marker.is_empty() && starts_with(bytes, app_marker) {
        return SourceComponents {
            kind: SourceKind::AppRelative,
            body: Span::new(app_marker.len(), len),
        };
    }

    if len > 0 && bytes[0] == b'/' {
        return SourceComponents {
            kind: SourceKind::Absolute,
            body: Span::new(0, len),
        };
    }

    SourceComponents {
        kind: SourceKind::Remote,
        body: Span::new(0, len),
    }
}

/// Returns true when `bytes` matches the file-or-resource grammar.
pub const fn is_file_or_resource(bytes: &[u8], resource_prefix: &[u8], app_marker: &[u8]) -> bool {
    !matches!(
        classify(bytes, resource_prefix, app_marker).kind,
        SourceKind::Remote
    )
}

/// Check if bytes starts with prefix
const fn starts_with(bytes: &[u8], prefix: &[u8]) -> bool {
    if bytes.len() < prefix.len() {
        return false;
    }

    let mut i = 0;
    while i < prefix.len() {
        if bytes[i] != prefix[i] {
            return false;
        }
        i += 1;
    }
    true
}
