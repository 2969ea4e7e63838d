//! Process plumbing: configuration loading and logging.

pub mod config;
pub mod logger;
