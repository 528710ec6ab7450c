//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → server.rs (Axum setup, middleware: request ID, timeout, tracing)
//!     → handlers.rs (extract path/body, call the gateway)
//!     → gateway (upstream round trips + shaping)
//!     → response (200 JSON on success, GatewayError mapping otherwise)
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
