//! Gateway facade: one method per inbound operation.
//!
//! Each method builds the remote request with the mappers, performs exactly
//! one call through the [`MdsService`] it was constructed with, and returns
//! the response (or the remote failure) unchanged.

pub mod params;


use std::sync::Arc;

use mds_types::protocol::{
    EntityMemberChangesetDeleteResponse, EntityMemberChangesetSaveResponse,
    EntityMemberChangesetsGetResponse, EntityMembersCreateResponse, EntityMembersDeleteResponse,
    EntityMembersGetResponse, EntityMembersUpdateResponse,
};
use mds_types::{MdsServiceConfig, SearchTermQuoting, UpstreamError};
use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::mappers::{changesets, members};
use crate::upstream::{HttpMdsClient, MdsService};
use params::{
    CreateEntityMember, DeleteChangeset, DeleteEntityMember, GetChangesets,
    GetEntityMemberByCode, GetEntityMemberByName, SaveChangeset, UpdateEntityMember,
    UpdateEntityMemberRelationship,
};

/// Greeting returned by the health-check operation.
pub const HELLO_GREETING: &str = "Hello MDS!";

#[derive(Clone)]
pub struct MdsGateway {
    service: Arc<dyn MdsService>,
    search_term_quoting: SearchTermQuoting,
}

impl MdsGateway {
    pub fn new(service: Arc<dyn MdsService>, search_term_quoting: SearchTermQuoting) -> Self {
        Self { service, search_term_quoting }
    }

    /// Gateway over the HTTP binding described by `config`.
    pub fn from_config(config: &MdsServiceConfig) -> AppResult<Self> {
        let client = HttpMdsClient::new(config)?;
        info!(
            "MDS gateway bound to {} as {} (search terms: {})",
            client.base_url(),
            config.credentials.qualified_username(),
            config.search_term_quoting
        );
        Ok(Self::new(Arc::new(client), config.search_term_quoting))
    }

    pub const fn search_term_quoting(&self) -> SearchTermQuoting {
        self.search_term_quoting
    }

    pub const fn say_hello(&self) -> &'static str {
        HELLO_GREETING
    }

    pub async fn create_entity_member(
        &self,
        params: &CreateEntityMember,
    ) -> Result<EntityMembersCreateResponse, UpstreamError> {
        info!(
            "[MDS] CreateEntityMember {}/{}/{} code={} type={}",
            params.model_name,
            params.version_name,
            params.entity_name,
            params.member_code,
            params.member_type
        );
        let request = members::build_create_request(params);
        debug!("[MDS] EntityMembersCreate request: {:?}", request);
        self.service.entity_members_create(request).await.inspect_err(log_failure)
    }

    pub async fn get_entity_member_by_name(
        &self,
        params: &GetEntityMemberByName,
    ) -> Result<EntityMembersGetResponse, UpstreamError> {
        info!(
            "[MDS] GetEntityMemberByName {}/{}/{} type={}",
            params.model_name, params.version_name, params.entity_name, params.member_type
        );
        let request = members::build_get_by_name_request(params, self.search_term_quoting);
        debug!("[MDS] EntityMembersGet request: {:?}", request);
        self.service.entity_members_get(request).await.inspect_err(log_failure)
    }

    pub async fn get_entity_member_by_code(
        &self,
        params: &GetEntityMemberByCode,
    ) -> Result<EntityMembersGetResponse, UpstreamError> {
        info!(
            "[MDS] GetEntityMemberByCode {}/{}/{} type={}",
            params.model_name, params.version_name, params.entity_name, params.member_type
        );
        let request = members::build_get_by_code_request(params, self.search_term_quoting);
        debug!("[MDS] EntityMembersGet request: {:?}", request);
        self.service.entity_members_get(request).await.inspect_err(log_failure)
    }

    pub async fn update_entity_member(
        &self,
        params: &UpdateEntityMember,
    ) -> Result<EntityMembersUpdateResponse, UpstreamError> {
        info!(
            "[MDS] UpdateEntityMember {}/{}/{} code={}",
            params.model_name, params.version_name, params.entity_name, params.member_code
        );
        let request = members::build_rename_request(params);
        debug!("[MDS] EntityMembersUpdate request: {:?}", request);
        self.service.entity_members_update(request).await.inspect_err(log_failure)
    }

    pub async fn update_entity_member_relationship(
        &self,
        params: &UpdateEntityMemberRelationship,
    ) -> Result<EntityMembersUpdateResponse, UpstreamError> {
        info!(
            "[MDS] UpdateEntityMemberRelationship {}/{}/{} {} -> {} in {}",
            params.model_name,
            params.version_name,
            params.entity_name,
            params.child_member_code,
            params.parent_member_code,
            params.hierarchy_name
        );
        let request = members::build_relationship_request(params);
        debug!("[MDS] EntityMembersUpdate request: {:?}", request);
        self.service.entity_members_update(request).await.inspect_err(log_failure)
    }

    pub async fn delete_entity_member(
        &self,
        params: &DeleteEntityMember,
    ) -> Result<EntityMembersDeleteResponse, UpstreamError> {
        info!(
            "[MDS] DeleteEntityMember {}/{}/{} code={} type={}",
            params.model_name,
            params.version_name,
            params.entity_name,
            params.member_code,
            params.member_type
        );
        let request = members::build_delete_request(params);
        debug!("[MDS] EntityMembersDelete request: {:?}", request);
        self.service.entity_members_delete(request).await.inspect_err(log_failure)
    }

    pub async fn save_changeset(
        &self,
        params: &SaveChangeset,
    ) -> Result<EntityMemberChangesetSaveResponse, UpstreamError> {
        info!(
            "[MDS] ChangesetSave {}/{}/{} changeset={} status={}",
            params.model_name,
            params.version_name,
            params.entity_name,
            params.changeset_name,
            params.status
        );
        let request = changesets::build_save_request(params);
        self.service.entity_member_changeset_save(request).await.inspect_err(log_failure)
    }

    pub async fn delete_changeset(
        &self,
        params: &DeleteChangeset,
    ) -> Result<EntityMemberChangesetDeleteResponse, UpstreamError> {
        info!(
            "[MDS] ChangesetDelete {}/{} changeset={}",
            params.model_name, params.version_name, params.changeset_name
        );
        let request = changesets::build_delete_request(params);
        self.service.entity_member_changeset_delete(request).await.inspect_err(log_failure)
    }

    pub async fn get_changesets(
        &self,
        params: &GetChangesets,
    ) -> Result<EntityMemberChangesetsGetResponse, UpstreamError> {
        info!(
            "[MDS] ChangesetsGet {}/{}/{} status={}",
            params.model_name, params.version_name, params.entity_name, params.status
        );
        let request = changesets::build_list_request(params);
        self.service.entity_member_changesets_get(request).await.inspect_err(log_failure)
    }
}

fn log_failure(error: &UpstreamError) {
    warn!("[MDS] {} failed: {}", error.operation(), error);
}
