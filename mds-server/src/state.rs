//! Application State
//!
//! One gateway, built at startup and shared read-only by every request.

use std::sync::Arc;

use mds_core::MdsGateway;
use mds_types::GatewayConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub gateway: MdsGateway,
    pub config: GatewayConfig,
}

impl AppState {
    pub fn new(gateway: MdsGateway, config: GatewayConfig) -> Self {
        Self { inner: Arc::new(AppStateInner { gateway, config }) }
    }

    /// Build the HTTP binding from `config` and wrap it.
    pub fn from_config(config: GatewayConfig) -> mds_core::AppResult<Self> {
        let gateway = MdsGateway::from_config(&config.mds)?;
        Ok(Self::new(gateway, config))
    }

    pub fn gateway(&self) -> &MdsGateway {
        &self.inner.gateway
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.inner.config
    }
}
