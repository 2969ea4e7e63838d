//! MDS Routes
//!
//! One route per gateway operation. Inputs come from the query string,
//! responses are the remote responses serialized as JSON.

mod changesets;
mod error;
mod members;

#[cfg(test)]
mod members_tests;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

pub use error::ApiError;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // Health
        .route("/SayHello", get(say_hello))
        // Members
        .route("/CreateEntityMember", post(members::create_entity_member))
        .route("/GetEntityMemberByName", post(members::get_entity_member_by_name))
        .route("/GetEntityMemberByCode", post(members::get_entity_member_by_code))
        .route("/UpdateEntityMember", post(members::update_entity_member))
        .route(
            "/UpdateEntityMemberRelationship",
            post(members::update_entity_member_relationship),
        )
        .route("/DeleteEntityMember", post(members::delete_entity_member))
        // Changesets
        .route("/ChangesetSave", post(changesets::save_changeset))
        .route("/ChangesetDelete", post(changesets::delete_changeset))
        .route("/ChangesetsGet", post(changesets::get_changesets))
        .fallback(api_not_found)
}

async fn say_hello(State(state): State<AppState>) -> Json<&'static str> {
    Json(state.gateway().say_hello())
}

async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "Not found"})))
}
