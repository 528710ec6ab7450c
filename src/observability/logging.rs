//! Structured logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured level applies to
/// this crate and tower_http.
pub fn init(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("employee_api={0},tower_http={0}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
