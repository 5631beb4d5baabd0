//! Logging initialization for test harnesses.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "mock_session=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the logging system.
///
/// Uses the `RUST_LOG` environment variable for filtering. If not set,
/// defaults to `mock_session=info`.
///
/// # Panics
///
/// Panics if called more than once, or if another tracing subscriber
/// has already been set.
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

/// Try to initialize the logging system.
///
/// Returns `Err` if a global subscriber is already installed, which is the
/// common case when several tests call this.
pub fn try_init() -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().compact().with_test_writer())
        .try_init()
}

/// Try to initialize logging with an explicit filter directive, such as the
/// level from [`SessionConfig`](crate::SessionConfig).
///
/// A bare level like `debug` is scoped to this crate.
pub fn try_init_with_filter(level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    let directive = if level.contains('=') {
        level.to_string()
    } else {
        format!("mock_session={}", level)
    };
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact().with_test_writer())
        .try_init()
}
