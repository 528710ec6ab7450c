//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and URL/address shapes
//! - Catch an inbound timeout too short to survive a full retry cycle
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid listener.bind_address '{0}': {1}")]
    BindAddress(String, String),

    #[error("invalid upstream.base_url '{0}': {1}")]
    BaseUrl(String, String),

    #[error("upstream.base_url '{0}' must use http or https")]
    BaseUrlScheme(String),

    #[error("retries.max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("upstream timeouts must be greater than zero")]
    ZeroUpstreamTimeout,

    #[error("timeouts.request_secs ({0}s) does not cover the retry window ({1}ms)")]
    TimeoutBelowRetryWindow(u64, u64),
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
            e.to_string(),
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::BaseUrlScheme(
                    config.upstream.base_url.clone(),
                ));
            }
        }
        Err(e) => {
            errors.push(ValidationError::BaseUrl(
                config.upstream.base_url.clone(),
                e.to_string(),
            ));
        }
    }

    if config.retries.max_attempts == 0 {
        errors.push(ValidationError::ZeroAttempts);
    }

    if config.upstream.connect_timeout_secs == 0 || config.upstream.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroUpstreamTimeout);
    }

    // A request that rides out every retry must still fit inside the inbound
    // timeout, or the caller gets cut off mid-recovery.
    let retry_window_ms = u64::from(config.retries.max_attempts.saturating_sub(1))
        .saturating_mul(config.retries.delay_ms);
    if config.timeouts.request_secs.saturating_mul(1000) <= retry_window_ms {
        errors.push(ValidationError::TimeoutBelowRetryWindow(
            config.timeouts.request_secs,
            retry_window_ms,
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
