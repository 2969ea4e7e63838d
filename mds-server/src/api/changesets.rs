//! Changeset handlers

use axum::{
    extract::{Query, State},
    response::Json,
};

use mds_core::params::{DeleteChangeset, GetChangesets, SaveChangeset};
use mds_types::protocol::{
    EntityMemberChangesetDeleteResponse, EntityMemberChangesetSaveResponse,
    EntityMemberChangesetsGetResponse,
};

use super::ApiError;
use crate::state::AppState;

pub async fn save_changeset(
    State(state): State<AppState>,
    Query(params): Query<SaveChangeset>,
) -> Result<Json<EntityMemberChangesetSaveResponse>, ApiError> {
    Ok(Json(state.gateway().save_changeset(&params).await?))
}

pub async fn delete_changeset(
    State(state): State<AppState>,
    Query(params): Query<DeleteChangeset>,
) -> Result<Json<EntityMemberChangesetDeleteResponse>, ApiError> {
    Ok(Json(state.gateway().delete_changeset(&params).await?))
}

pub async fn get_changesets(
    State(state): State<AppState>,
    Query(params): Query<GetChangesets>,
) -> Result<Json<EntityMemberChangesetsGetResponse>, ApiError> {
    Ok(Json(state.gateway().get_changesets(&params).await?))
}
