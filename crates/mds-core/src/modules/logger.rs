//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::{AppError, AppResult};

/// Install the global subscriber. `RUST_LOG` wins over `default_level` when set.
pub fn init_logger(default_level: &str) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| AppError::Logging(format!("invalid log filter '{}': {}", default_level, e)))?;

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).with_target(false).finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Logging(e.to_string()))
}
