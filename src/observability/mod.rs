//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - `RUST_LOG` wins over the configured level when set
//! - Request IDs flow through every inbound request via middleware

pub mod logging;
