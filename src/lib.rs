pub mod config;
pub mod error;
pub mod logging;
pub mod server;

pub use error::{Error, Result};

/// Name reported by the health check.
pub const SERVICE_NAME: &str = "porchest-ai";
