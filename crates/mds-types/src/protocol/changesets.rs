//! Changeset lifecycle operations: save, delete, list.

use serde::{Deserialize, Serialize};

use super::common::OperationResult;
use crate::models::{Changeset, ChangesetStatus, Identifier};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMemberChangesetSaveRequest {
    pub model_id: Identifier,
    pub version_id: Identifier,
    pub changeset: Changeset,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMemberChangesetSaveResponse {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub operation_result: OperationResult,
    /// Identifier assigned or confirmed by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMemberChangesetDeleteRequest {
    pub model_id: Identifier,
    pub version_id: Identifier,
    pub changeset_id: Identifier,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMemberChangesetDeleteResponse {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub operation_result: OperationResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMemberChangesetsGetRequest {
    pub model_id: Identifier,
    pub version_id: Identifier,
    pub entity_id: Identifier,
    #[serde(default)]
    pub status: ChangesetStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMemberChangesetsGetResponse {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub operation_result: OperationResult,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub changesets: Vec<Changeset>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_save_response_with_null_fields() {
        let response: EntityMemberChangesetSaveResponse = serde_json::from_str(
            r#"{
                "OperationResult": {"Errors": null, "RequestId": null},
                "Identifier": {"Id": "5d2c2e9a-8f0b-4c53-9d55-0b8e7a3c1f10", "Name": null}
            }"#,
        )
        .unwrap();
        assert!(response.operation_result.is_success());
        let identifier = response.identifier.unwrap();
        assert!(identifier.id.is_some());
        assert_eq!(identifier.name, None);
    }

    #[test]
    fn test_list_response_with_null_collections() {
        let response: EntityMemberChangesetsGetResponse =
            serde_json::from_str(r#"{"OperationResult": null, "Changesets": null}"#).unwrap();
        assert!(response.operation_result.is_success());
        assert!(response.changesets.is_empty());

        let response: EntityMemberChangesetsGetResponse = serde_json::from_str(
            r#"{"Changesets": [{
                "Identifier": {"Name": "price-update"},
                "EntityId": {"Name": "Product"},
                "Status": null
            }]}"#,
        )
        .unwrap();
        assert_eq!(response.changesets[0].status, ChangesetStatus::default());
    }
}
