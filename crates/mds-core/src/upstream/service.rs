//! Remote MDS service seam.

use async_trait::async_trait;
use mds_types::protocol::{
    EntityMemberChangesetDeleteRequest, EntityMemberChangesetDeleteResponse,
    EntityMemberChangesetSaveRequest, EntityMemberChangesetSaveResponse,
    EntityMemberChangesetsGetRequest, EntityMemberChangesetsGetResponse,
    EntityMembersCreateRequest, EntityMembersCreateResponse, EntityMembersDeleteRequest,
    EntityMembersDeleteResponse, EntityMembersGetRequest, EntityMembersGetResponse,
    EntityMembersUpdateRequest, EntityMembersUpdateResponse,
};
use mds_types::UpstreamError;

/// Remote operation names as the service knows them.
pub mod operations {
    pub const ENTITY_MEMBERS_CREATE: &str = "EntityMembersCreate";
    pub const ENTITY_MEMBERS_GET: &str = "EntityMembersGet";
    pub const ENTITY_MEMBERS_UPDATE: &str = "EntityMembersUpdate";
    pub const ENTITY_MEMBERS_DELETE: &str = "EntityMembersDelete";
    pub const CHANGESET_SAVE: &str = "EntityMemberChangesetSave";
    pub const CHANGESET_DELETE: &str = "EntityMemberChangesetDelete";
    pub const CHANGESETS_GET: &str = "EntityMemberChangesetsGet";
}

/// The remote procedure client: one method per remote operation.
///
/// Implementations perform exactly one round trip per call and return the
/// remote response untouched.
#[async_trait]
pub trait MdsService: Send + Sync {
    async fn entity_members_create(
        &self,
        request: EntityMembersCreateRequest,
    ) -> Result<EntityMembersCreateResponse, UpstreamError>;

    async fn entity_members_get(
        &self,
        request: EntityMembersGetRequest,
    ) -> Result<EntityMembersGetResponse, UpstreamError>;

    async fn entity_members_update(
        &self,
        request: EntityMembersUpdateRequest,
    ) -> Result<EntityMembersUpdateResponse, UpstreamError>;

    async fn entity_members_delete(
        &self,
        request: EntityMembersDeleteRequest,
    ) -> Result<EntityMembersDeleteResponse, UpstreamError>;

    async fn entity_member_changeset_save(
        &self,
        request: EntityMemberChangesetSaveRequest,
    ) -> Result<EntityMemberChangesetSaveResponse, UpstreamError>;

    async fn entity_member_changeset_delete(
        &self,
        request: EntityMemberChangesetDeleteRequest,
    ) -> Result<EntityMemberChangesetDeleteResponse, UpstreamError>;

    async fn entity_member_changesets_get(
        &self,
        request: EntityMemberChangesetsGetRequest,
    ) -> Result<EntityMemberChangesetsGetResponse, UpstreamError>;
}
