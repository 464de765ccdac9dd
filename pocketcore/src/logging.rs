//! Tracing setup
//!
//! `RUST_LOG` wins over the filter passed in. Repeated calls are ignored.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Install the global subscriber with `default_filter` as the fallback.
pub fn init(default_filter: &str) {
    if TRACING_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::Relaxed)
        .is_err()
    {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    // try_init: a test harness may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();
}

/// Filter for a `-v` count: 0 keeps the configured filter.
pub fn verbosity_filter(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "warn,pocketcalc=debug,pocketcore=debug".to_string(),
        _ => "trace".to_string(),
    }
}
