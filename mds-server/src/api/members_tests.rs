#![allow(clippy::unwrap_used, clippy::indexing_slicing, reason = "test assertions")]

use std::sync::Arc;

use axum::http::StatusCode;
use mds_core::upstream::testing::{CannedResponses, RecordedRequest, RecordingMdsService};
use mds_types::protocol::{EntityMembersCreateResponse, OperationError, OperationResult};
use mds_types::{MemberIdentifier, MemberType, UpstreamError};

use crate::test_helpers::test_server;

const SCOPE: [(&str, &str); 3] =
    [("modelName", "Product"), ("versionName", "VERSION_1"), ("entityName", "Product")];

#[tokio::test]
async fn test_say_hello() {
    let server = test_server(Arc::new(RecordingMdsService::new()));

    let response = server.get("/MDS/SayHello").await;

    response.assert_status_ok();
    assert_eq!(response.json::<String>(), "Hello MDS!");
}

#[tokio::test]
async fn test_create_consolidated_member() {
    let canned = EntityMembersCreateResponse {
        operation_result: OperationResult::default(),
        created_members: Some(vec![MemberIdentifier::new_member(
            "Road Bikes",
            "RB",
            MemberType::Consolidated,
        )]),
    };
    let service = Arc::new(RecordingMdsService::with_responses(CannedResponses {
        create: canned,
        ..CannedResponses::default()
    }));
    let server = test_server(service.clone());

    let response = server
        .post("/MDS/CreateEntityMember")
        .add_query_params(SCOPE)
        .add_query_params([
            ("aNewMemberName", "Road Bikes"),
            ("aNewCode", "RB"),
            ("memberType", "Consolidated"),
            ("hierarchyName", "Categories"),
        ])
        .await;

    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["CreatedMembers"][0]["Code"], "RB");
    assert_eq!(json["OperationResult"]["Errors"], serde_json::json!([]));

    match service.last_request() {
        Some(RecordedRequest::Create(request)) => {
            let member = &request.members.members[0];
            let parents = member.parents.as_ref().unwrap();
            assert_eq!(parents.len(), 1);
            assert_eq!(parents[0].hierarchy_id.name.as_deref(), Some("Categories"));
            assert!(parents[0].parent_id.is_root());
            assert!(request.members.changeset_id.is_none());
        }
        other => panic!("expected create request, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_by_name_escapes_quotes() {
    let service = Arc::new(RecordingMdsService::new());
    let server = test_server(service.clone());

    let response = server
        .post("/MDS/GetEntityMemberByName")
        .add_query_params(SCOPE)
        .add_query_params([("memberType", "Leaf"), ("memberName", "x' OR Code <> '")])
        .await;

    response.assert_status_ok();
    match service.last_request() {
        Some(RecordedRequest::Get(request)) => {
            assert_eq!(request.members_get_criteria.search_term, "Name = 'x'' OR Code <> '''");
        }
        other => panic!("expected get request, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_uses_mem_type_parameter() {
    let service = Arc::new(RecordingMdsService::new());
    let server = test_server(service.clone());

    let response = server
        .post("/MDS/DeleteEntityMember")
        .add_query_params(SCOPE)
        .add_query_params([("memberCode", "RB"), ("memType", "Consolidated"), ("changesetName", "")])
        .await;

    response.assert_status_ok();
    match service.last_request() {
        Some(RecordedRequest::Delete(request)) => {
            assert_eq!(request.members.member_type, MemberType::Consolidated);
            assert!(request.members.changeset_id.is_none());
        }
        other => panic!("expected delete request, got {other:?}"),
    }
}

#[tokio::test]
async fn test_relationship_update_reaches_service() {
    let service = Arc::new(RecordingMdsService::new());
    let server = test_server(service.clone());

    let response = server
        .post("/MDS/UpdateEntityMemberRelationship")
        .add_query_params(SCOPE)
        .add_query_params([
            ("hierarchyName", "Categories"),
            ("parentMemberCode", "RB"),
            ("childMemberCode", "RB-100"),
        ])
        .await;

    response.assert_status_ok();
    assert!(matches!(service.last_request(), Some(RecordedRequest::Update(_))));
}

#[tokio::test]
async fn test_unknown_member_type_is_rejected_before_remote_call() {
    let service = Arc::new(RecordingMdsService::new());
    let server = test_server(service.clone());

    let response = server
        .post("/MDS/GetEntityMemberByCode")
        .add_query_params(SCOPE)
        .add_query_params([("memberType", "Branch"), ("memberCode", "AC1")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn test_missing_parameter_is_rejected() {
    let service = Arc::new(RecordingMdsService::new());
    let server = test_server(service.clone());

    let response = server
        .post("/MDS/UpdateEntityMember")
        .add_query_params(SCOPE)
        .add_query_params([("memberCode", "RB"), ("memberType", "Leaf")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn test_operation_errors_pass_through_with_200() {
    let canned = EntityMembersCreateResponse {
        operation_result: OperationResult {
            errors: vec![OperationError {
                code: "210001".to_string(),
                description: "The member code already exists.".to_string(),
                context: None,
            }],
            request_id: None,
        },
        created_members: None,
    };
    let service = Arc::new(RecordingMdsService::with_responses(CannedResponses {
        create: canned,
        ..CannedResponses::default()
    }));
    let server = test_server(service);

    let response = server
        .post("/MDS/CreateEntityMember")
        .add_query_params(SCOPE)
        .add_query_params([("aNewMemberName", "Road Bikes"), ("aNewCode", "RB"), ("memberType", "Leaf")])
        .await;

    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["OperationResult"]["Errors"][0]["Code"], "210001");
}

#[tokio::test]
async fn test_remote_rejection_relays_status() {
    let service = Arc::new(RecordingMdsService::failing(UpstreamError::Rejected {
        operation: "EntityMembersUpdate".to_string(),
        status: 500,
        body: "fault".to_string(),
    }));
    let server = test_server(service);

    let response = server
        .post("/MDS/UpdateEntityMember")
        .add_query_params(SCOPE)
        .add_query_params([
            ("memberCode", "RB"),
            ("memberType", "Leaf"),
            ("newMemberName", "Road Bicycles"),
        ])
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = response.json();
    assert_eq!(json["error"]["type"], "Rejected");
    assert_eq!(json["error"]["details"]["body"], "fault");
}

#[tokio::test]
async fn test_transport_failure_is_bad_gateway() {
    let service = Arc::new(RecordingMdsService::failing(UpstreamError::Transport {
        operation: "EntityMembersGet".to_string(),
        message: "connection refused".to_string(),
    }));
    let server = test_server(service);

    let response = server
        .post("/MDS/GetEntityMemberByCode")
        .add_query_params(SCOPE)
        .add_query_params([("memberType", "Leaf"), ("memberCode", "AC1")])
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = response.json();
    assert_eq!(json["error"]["type"], "Transport");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = test_server(Arc::new(RecordingMdsService::new()));

    let response = server.post("/MDS/MergeMembers").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json: serde_json::Value = response.json();
    assert_eq!(json["error"], "Not found");
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = test_server(Arc::new(RecordingMdsService::new()));

    for path in ["/health", "/healthz"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let json: serde_json::Value = response.json();
        assert_eq!(json["status"], "ok");
    }

    let response = server.get("/version").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["cargo_version"], env!("CARGO_PKG_VERSION"));
}
