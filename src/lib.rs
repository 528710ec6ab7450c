//! Employee REST facade library.

pub mod config;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod observability;
pub mod resilience;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
