//! Entity member handlers

use axum::{
    extract::{Query, State},
    response::Json,
};

use mds_core::params::{
    CreateEntityMember, DeleteEntityMember, GetEntityMemberByCode, GetEntityMemberByName,
    UpdateEntityMember, UpdateEntityMemberRelationship,
};
use mds_types::protocol::{
    EntityMembersCreateResponse, EntityMembersDeleteResponse, EntityMembersGetResponse,
    EntityMembersUpdateResponse,
};

use super::ApiError;
use crate::state::AppState;

pub async fn create_entity_member(
    State(state): State<AppState>,
    Query(params): Query<CreateEntityMember>,
) -> Result<Json<EntityMembersCreateResponse>, ApiError> {
    Ok(Json(state.gateway().create_entity_member(&params).await?))
}

pub async fn get_entity_member_by_name(
    State(state): State<AppState>,
    Query(params): Query<GetEntityMemberByName>,
) -> Result<Json<EntityMembersGetResponse>, ApiError> {
    Ok(Json(state.gateway().get_entity_member_by_name(&params).await?))
}

pub async fn get_entity_member_by_code(
    State(state): State<AppState>,
    Query(params): Query<GetEntityMemberByCode>,
) -> Result<Json<EntityMembersGetResponse>, ApiError> {
    Ok(Json(state.gateway().get_entity_member_by_code(&params).await?))
}

pub async fn update_entity_member(
    State(state): State<AppState>,
    Query(params): Query<UpdateEntityMember>,
) -> Result<Json<EntityMembersUpdateResponse>, ApiError> {
    Ok(Json(state.gateway().update_entity_member(&params).await?))
}

pub async fn update_entity_member_relationship(
    State(state): State<AppState>,
    Query(params): Query<UpdateEntityMemberRelationship>,
) -> Result<Json<EntityMembersUpdateResponse>, ApiError> {
    Ok(Json(state.gateway().update_entity_member_relationship(&params).await?))
}

pub async fn delete_entity_member(
    State(state): State<AppState>,
    Query(params): Query<DeleteEntityMember>,
) -> Result<Json<EntityMembersDeleteResponse>, ApiError> {
    Ok(Json(state.gateway().delete_entity_member(&params).await?))
}
