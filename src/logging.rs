//! Tracing subscriber and panic hook installation for hosts.
//!
//! The library itself only emits `tracing` events. Hosts that have no
//! subscriber of their own can call [`install_tracing`] once at startup.

use std::panic;
use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when neither `RUST_LOG` nor the caller provides a valid one.
pub const DEFAULT_FILTER: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Installs a global `fmt` subscriber and routes panics through tracing.
///
/// `RUST_LOG` takes precedence over `filter`. On Android, events are also
/// forwarded to logcat. Calls after the first are ignored, as is a failure to
/// install because another subscriber is already set.
pub fn install_tracing(filter: &str) {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let console = fmt::layer()
            .without_time()
            .with_target(false)
            .with_filter(filter);

        #[cfg(target_os = "android")]
        let result = {
            let registry = tracing_subscriber::registry().with(console);
            if let Ok(android) = tracing_android::layer("Drawee") {
                registry.with(android).try_init()
            } else {
                registry.try_init()
            }
        };

        #[cfg(not(target_os = "android"))]
        let result = tracing_subscriber::registry().with(console).try_init();

        if result.is_err() {
            tracing::debug!("a global tracing subscriber is already installed");
        }

        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            tracing_panic::panic_hook(info);
            previous(info);
        }));
    });
}

/// Returns true once [`install_tracing`] has run.
pub fn is_installed() -> bool {
    TRACING_INSTALLED.is_completed()
}
