//! In-memory stand-in for the remote service.
//!
//! Records every request it receives and answers with canned responses, or
//! with a canned failure when one is set.

use async_trait::async_trait;
use parking_lot::Mutex;

use mds_types::protocol::{
    EntityMemberChangesetDeleteRequest, EntityMemberChangesetDeleteResponse,
    EntityMemberChangesetSaveRequest, EntityMemberChangesetSaveResponse,
    EntityMemberChangesetsGetRequest, EntityMemberChangesetsGetResponse,
    EntityMembersCreateRequest, EntityMembersCreateResponse, EntityMembersDeleteRequest,
    EntityMembersDeleteResponse, EntityMembersGetRequest, EntityMembersGetResponse,
    EntityMembersUpdateRequest, EntityMembersUpdateResponse,
};
use mds_types::UpstreamError;

use super::service::MdsService;

/// A request captured by [`RecordingMdsService`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest {
    Create(EntityMembersCreateRequest),
    Get(EntityMembersGetRequest),
    Update(EntityMembersUpdateRequest),
    Delete(EntityMembersDeleteRequest),
    ChangesetSave(EntityMemberChangesetSaveRequest),
    ChangesetDelete(EntityMemberChangesetDeleteRequest),
    ChangesetsGet(EntityMemberChangesetsGetRequest),
}

/// Responses handed back per operation.
#[derive(Debug, Clone, Default)]
pub struct CannedResponses {
    pub create: EntityMembersCreateResponse,
    pub get: EntityMembersGetResponse,
    pub update: EntityMembersUpdateResponse,
    pub delete: EntityMembersDeleteResponse,
    pub changeset_save: EntityMemberChangesetSaveResponse,
    pub changeset_delete: EntityMemberChangesetDeleteResponse,
    pub changesets_get: EntityMemberChangesetsGetResponse,
}

#[derive(Default)]
pub struct RecordingMdsService {
    responses: CannedResponses,
    failure: Option<UpstreamError>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingMdsService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: CannedResponses) -> Self {
        Self { responses, ..Self::default() }
    }

    /// Every call fails with `error`.
    pub fn failing(error: UpstreamError) -> Self {
        Self { failure: Some(error), ..Self::default() }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    fn answer<T: Clone>(&self, recorded: RecordedRequest, response: &T) -> Result<T, UpstreamError> {
        self.requests.lock().push(recorded);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(response.clone()),
        }
    }
}

#[async_trait]
impl MdsService for RecordingMdsService {
    async fn entity_members_create(
        &self,
        request: EntityMembersCreateRequest,
    ) -> Result<EntityMembersCreateResponse, UpstreamError> {
        self.answer(RecordedRequest::Create(request), &self.responses.create)
    }

    async fn entity_members_get(
        &self,
        request: EntityMembersGetRequest,
    ) -> Result<EntityMembersGetResponse, UpstreamError> {
        self.answer(RecordedRequest::Get(request), &self.responses.get)
    }

    async fn entity_members_update(
        &self,
        request: EntityMembersUpdateRequest,
    ) -> Result<EntityMembersUpdateResponse, UpstreamError> {
        self.answer(RecordedRequest::Update(request), &self.responses.update)
    }

    async fn entity_members_delete(
        &self,
        request: EntityMembersDeleteRequest,
    ) -> Result<EntityMembersDeleteResponse, UpstreamError> {
        self.answer(RecordedRequest::Delete(request), &self.responses.delete)
    }

    async fn entity_member_changeset_save(
        &self,
        request: EntityMemberChangesetSaveRequest,
    ) -> Result<EntityMemberChangesetSaveResponse, UpstreamError> {
        self.answer(RecordedRequest::ChangesetSave(request), &self.responses.changeset_save)
    }

    async fn entity_member_changeset_delete(
        &self,
        request: EntityMemberChangesetDeleteRequest,
    ) -> Result<EntityMemberChangesetDeleteResponse, UpstreamError> {
        self.answer(RecordedRequest::ChangesetDelete(request), &self.responses.changeset_delete)
    }

    async fn entity_member_changesets_get(
        &self,
        request: EntityMemberChangesetsGetRequest,
    ) -> Result<EntityMemberChangesetsGetResponse, UpstreamError> {
        self.answer(RecordedRequest::ChangesetsGet(request), &self.responses.changesets_get)
    }
}
