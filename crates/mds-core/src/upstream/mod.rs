//! Upstream module - client interfaces for the remote MDS service

pub mod client;
pub mod service;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::HttpMdsClient;
pub use service::{operations, MdsService};
