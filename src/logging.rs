//! Diagnostics on stderr.
//!
//! Quiet (`warn`) by default so the prompts own the terminal. `RUST_LOG`
//! overrides the default, e.g. `RUST_LOG=calculator=debug`.

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub const DEFAULT_FILTER: &str = "warn";

static INIT: Once = Once::new();

pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Only the first call has any effect.
pub fn init_with_filter(default: &str) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(default)
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
