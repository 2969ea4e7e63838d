//! Entity member operations: create, get, update, delete.

use serde::{Deserialize, Serialize};

use super::common::OperationResult;
use crate::models::{EntityMembers, Identifier, MemberIdentifier, MemberReturnOption, MemberType};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMembersCreateRequest {
    pub members: EntityMembers,
    #[serde(default)]
    pub return_created_identifiers: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMembersCreateResponse {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub operation_result: OperationResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_members: Option<Vec<MemberIdentifier>>,
}

/// Filter for a member lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMembersGetCriteria {
    pub model_id: Identifier,
    pub version_id: Identifier,
    pub entity_id: Identifier,
    pub member_type: MemberType,
    pub member_return_option: MemberReturnOption,
    pub search_term: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMembersGetRequest {
    pub members_get_criteria: EntityMembersGetCriteria,
}

/// Paging/count information returned alongside a lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMembersInformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMembersGetResponse {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub operation_result: OperationResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_members: Option<EntityMembers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_members_information: Option<EntityMembersInformation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMembersUpdateRequest {
    pub members: EntityMembers,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMembersUpdateResponse {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub operation_result: OperationResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMembersDeleteRequest {
    pub members: EntityMembers,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMembersDeleteResponse {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub operation_result: OperationResult,
}
