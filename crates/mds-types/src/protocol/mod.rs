//! Request/response shapes of the remote MDS operations.
//!
//! One request and one response type per remote operation. Field names follow
//! the remote contract (PascalCase).

pub mod changesets;
pub mod common;
pub mod members;

pub use changesets::{
    EntityMemberChangesetDeleteRequest, EntityMemberChangesetDeleteResponse,
    EntityMemberChangesetSaveRequest, EntityMemberChangesetSaveResponse,
    EntityMemberChangesetsGetRequest, EntityMemberChangesetsGetResponse,
};
pub use common::{OperationError, OperationResult};
pub use members::{
    EntityMembersCreateRequest, EntityMembersCreateResponse, EntityMembersDeleteRequest,
    EntityMembersDeleteResponse, EntityMembersGetCriteria, EntityMembersGetRequest,
    EntityMembersGetResponse, EntityMembersInformation, EntityMembersUpdateRequest,
    EntityMembersUpdateResponse,
};
