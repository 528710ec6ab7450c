//! Employee gateway subsystem.
//!
//! # Data Flow
//! ```text
//! Router handler
//!     → client.rs (one or more upstream round trips, each retry-wrapped)
//!     → in-memory shaping (filter / max / sort + truncate)
//!     → back to the handler
//! ```
//!
//! # Design Decisions
//! - The gateway knows nothing about the inbound router; it exposes plain
//!   async methods returning `Result<_, GatewayError>`
//! - Every operation observes the freshest upstream snapshot; nothing is
//!   cached between calls

pub mod client;
pub mod error;

pub use client::EmployeeGateway;
pub use error::GatewayError;
