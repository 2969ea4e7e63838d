//! Gateway configuration models.

mod enums;
mod gateway;
mod service;

pub use enums::SearchTermQuoting;
pub use gateway::{GatewayConfig, ServerConfig};
pub use service::{MdsCredentials, MdsServiceConfig};
