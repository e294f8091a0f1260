//! Process-wide lifecycle of the image pipeline.
//!
//! The wrapped pipeline is initialized once per process, before the first
//! drawee view is created, and only when the host can hand over a platform
//! context.

use std::sync::{Mutex, PoisonError};

use drawee_core::{ImagePipeline, PlatformContext};

static INITIALIZED: Mutex<bool> = Mutex::new(false);

/// Initializes `pipeline` unless that already happened in this process.
///
/// Returns `false` without touching the pipeline if no platform context is
/// available, and `true` once the pipeline is initialized.
pub fn initialize<P: ImagePipeline + ?Sized>(
    pipeline: &P,
    context: Option<&PlatformContext>,
) -> bool {
    let Some(context) = context else {
        tracing::debug!("no platform context, skipping image pipeline initialization");
        return false;
    };

    let mut initialized = INITIALIZED.lock().unwrap_or_else(PoisonError::into_inner);
    if !*initialized {
        pipeline.initialize(context);
        *initialized = true;
        tracing::debug!("image pipeline initialized");
    }
    true
}

/// Returns true while the pipeline is initialized.
pub fn is_initialized() -> bool {
    *INITIALIZED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shuts `pipeline` down if it was initialized.
///
/// A later [`initialize`] call initializes it again.
pub fn shutdown<P: ImagePipeline + ?Sized>(pipeline: &P) {
    let mut initialized = INITIALIZED.lock().unwrap_or_else(PoisonError::into_inner);
    if *initialized {
        pipeline.shutdown();
        *initialized = false;
        tracing::debug!("image pipeline shut down");
    }
}
