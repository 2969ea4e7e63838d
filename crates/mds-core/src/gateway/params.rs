//! Flat caller parameters, one struct per gateway operation.
//!
//! Field names deserialize from the camelCase query-string names the HTTP
//! surface exposes.

use mds_types::{ChangesetStatus, MemberType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntityMember {
    pub model_name: String,
    pub version_name: String,
    pub entity_name: String,
    #[serde(rename = "aNewMemberName")]
    pub member_name: String,
    #[serde(rename = "aNewCode")]
    pub member_code: String,
    pub member_type: MemberType,
    /// Only read when `member_type` is `Consolidated`
    #[serde(default)]
    pub hierarchy_name: Option<String>,
    #[serde(default)]
    pub changeset_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetEntityMemberByName {
    pub model_name: String,
    pub version_name: String,
    pub entity_name: String,
    pub member_type: MemberType,
    pub member_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetEntityMemberByCode {
    pub model_name: String,
    pub version_name: String,
    pub entity_name: String,
    pub member_type: MemberType,
    pub member_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntityMember {
    pub model_name: String,
    pub version_name: String,
    pub entity_name: String,
    pub member_code: String,
    /// Type of the member reference; the container type is always `Leaf`
    pub member_type: MemberType,
    pub new_member_name: String,
    #[serde(default)]
    pub changeset_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntityMemberRelationship {
    pub model_name: String,
    pub version_name: String,
    pub entity_name: String,
    pub hierarchy_name: String,
    pub parent_member_code: String,
    pub child_member_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEntityMember {
    pub model_name: String,
    pub version_name: String,
    pub entity_name: String,
    pub member_code: String,
    #[serde(rename = "memType")]
    pub member_type: MemberType,
    #[serde(default)]
    pub changeset_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveChangeset {
    pub model_name: String,
    pub version_name: String,
    pub entity_name: String,
    pub changeset_name: String,
    /// Remote GUID of an existing changeset
    #[serde(default)]
    pub changeset_id: Option<Uuid>,
    pub status: ChangesetStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteChangeset {
    pub model_name: String,
    pub version_name: String,
    #[serde(rename = "name")]
    pub changeset_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetChangesets {
    pub model_name: String,
    pub version_name: String,
    pub entity_name: String,
    /// `NotSpecified` asks for changesets in any state
    #[serde(default)]
    pub status: ChangesetStatus,
}
