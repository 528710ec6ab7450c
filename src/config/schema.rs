//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every section has defaults so a minimal (or absent) config file works.

use serde::{Deserialize, Serialize};

/// Root configuration for the employee facade.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream employee service endpoint and client timeouts.
    pub upstream: UpstreamConfig,

    /// Retry policy for rate-limited upstream calls.
    pub retries: RetryConfig,

    /// Inbound timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream employee service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the upstream employee endpoint.
    pub base_url: String,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Per-round-trip request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8112/api/v1/employee".to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 10,
        }
    }
}

/// Retry configuration for rate-limited upstream calls.
///
/// Defaults mirror the upstream's throttle window: the service keeps
/// answering 429 for roughly half a minute once it starts limiting.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts including the initial one.
    pub max_attempts: u32,

    /// Constant delay between attempts in milliseconds.
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay_ms: 31_000,
        }
    }
}

/// Inbound timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time an inbound request may take, in seconds. Must cover a full
    /// retry cycle (worst case: (max_attempts - 1) * delay).
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 180 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
