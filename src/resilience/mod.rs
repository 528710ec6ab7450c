//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Gateway call to upstream:
//!     → retry.rs (re-attempt on 429, constant delay, bounded attempts)
//!     → all other failures propagate immediately
//! ```
//!
//! # Design Decisions
//! - Only rate-limit responses are retryable; everything else fails fast
//! - Constant delay between attempts, matching the upstream's throttle window
//! - Connect/request timeouts are enforced by the HTTP client itself

pub mod retry;

pub use retry::{with_retry, RetryPolicy};
