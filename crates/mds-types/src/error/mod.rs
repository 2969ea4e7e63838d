//! Typed error definitions for the MDS gateway.
//!
//! Each domain has its own enum. All errors are designed to be:
//!
//! - **Serializable** for API responses via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants

mod config;
mod upstream;

pub use config::ConfigError;
pub use upstream::UpstreamError;
