mod request_executor;


use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use mds_types::protocol::{
    EntityMemberChangesetDeleteRequest, EntityMemberChangesetDeleteResponse,
    EntityMemberChangesetSaveRequest, EntityMemberChangesetSaveResponse,
    EntityMemberChangesetsGetRequest, EntityMemberChangesetsGetResponse,
    EntityMembersCreateRequest, EntityMembersCreateResponse, EntityMembersDeleteRequest,
    EntityMembersDeleteResponse, EntityMembersGetRequest, EntityMembersGetResponse,
    EntityMembersUpdateRequest, EntityMembersUpdateResponse,
};
use mds_types::{MdsCredentials, MdsServiceConfig, UpstreamError};

use super::service::{operations, MdsService};
use crate::error::AppResult;

pub use request_executor::build_url;

/// HTTP binding of the MDS service: JSON bodies, basic auth with the
/// configured credential triple.
pub struct HttpMdsClient {
    http_client: Client,
    base_url: String,
    credentials: MdsCredentials,
}

impl HttpMdsClient {
    /// Build the client from configuration. Credentials are fixed for the
    /// lifetime of the client.
    pub fn new(config: &MdsServiceConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;
        Ok(Self::with_client(http_client, &config.service_url, config.credentials.clone()))
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(
        http_client: Client,
        base_url: &str,
        credentials: MdsCredentials,
    ) -> Self {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if url::Url::parse(&base_url).is_err() {
            tracing::warn!("MDS service URL '{}' does not parse, requests will fail", base_url);
        }
        Self { http_client, base_url, credentials }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call<Req, Resp>(&self, operation: &str, request: &Req) -> Result<Resp, UpstreamError>
    where
        Req: serde::Serialize + Sync,
        Resp: serde::de::DeserializeOwned,
    {
        request_executor::execute(
            &self.http_client,
            &self.base_url,
            operation,
            &self.credentials,
            request,
        )
        .await
    }
}

#[async_trait]
impl MdsService for HttpMdsClient {
    async fn entity_members_create(
        &self,
        request: EntityMembersCreateRequest,
    ) -> Result<EntityMembersCreateResponse, UpstreamError> {
        self.call(operations::ENTITY_MEMBERS_CREATE, &request).await
    }

    async fn entity_members_get(
        &self,
        request: EntityMembersGetRequest,
    ) -> Result<EntityMembersGetResponse, UpstreamError> {
        self.call(operations::ENTITY_MEMBERS_GET, &request).await
    }

    async fn entity_members_update(
        &self,
        request: EntityMembersUpdateRequest,
    ) -> Result<EntityMembersUpdateResponse, UpstreamError> {
        self.call(operations::ENTITY_MEMBERS_UPDATE, &request).await
    }

    async fn entity_members_delete(
        &self,
        request: EntityMembersDeleteRequest,
    ) -> Result<EntityMembersDeleteResponse, UpstreamError> {
        self.call(operations::ENTITY_MEMBERS_DELETE, &request).await
    }

    async fn entity_member_changeset_save(
        &self,
        request: EntityMemberChangesetSaveRequest,
    ) -> Result<EntityMemberChangesetSaveResponse, UpstreamError> {
        self.call(operations::CHANGESET_SAVE, &request).await
    }

    async fn entity_member_changeset_delete(
        &self,
        request: EntityMemberChangesetDeleteRequest,
    ) -> Result<EntityMemberChangesetDeleteResponse, UpstreamError> {
        self.call(operations::CHANGESET_DELETE, &request).await
    }

    async fn entity_member_changesets_get(
        &self,
        request: EntityMemberChangesetsGetRequest,
    ) -> Result<EntityMemberChangesetsGetResponse, UpstreamError> {
        self.call(operations::CHANGESETS_GET, &request).await
    }
}
