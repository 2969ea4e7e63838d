//! Test helpers for mds-server unit tests.

use std::sync::Arc;

use axum_test::TestServer;
use mds_core::upstream::testing::RecordingMdsService;
use mds_core::MdsGateway;
use mds_types::{GatewayConfig, SearchTermQuoting};

use crate::router::build_router;
use crate::state::AppState;

/// `AppState` over a recording fake of the remote service.
pub fn test_app_state(service: Arc<RecordingMdsService>) -> AppState {
    let config = GatewayConfig::default();
    let gateway = MdsGateway::new(service, SearchTermQuoting::Escaped);
    AppState::new(gateway, config)
}

/// Full router around `service`, ready for requests.
pub fn test_server(service: Arc<RecordingMdsService>) -> TestServer {
    TestServer::new(build_router(test_app_state(service))).expect("failed to start test server")
}
