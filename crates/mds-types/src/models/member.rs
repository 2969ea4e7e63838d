//! Members, their attributes, and hierarchy relationships.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{AttributeValueType, MemberType, RelationshipType};
use super::identifier::{Identifier, MemberIdentifier};

/// Name of the attribute that holds a member's display name.
pub const NAME_ATTRIBUTE: &str = "Name";

/// Typed key/value used to read or mutate one member field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Attribute {
    pub identifier: Identifier,
    #[serde(rename = "Type", default, deserialize_with = "crate::de::null_as_default")]
    pub value_type: AttributeValueType,
    #[serde(default)]
    pub value: Value,
}

impl Attribute {
    /// String attribute with the given name and value.
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            identifier: Identifier::named(name),
            value_type: AttributeValueType::String,
            value: Value::String(value.into()),
        }
    }
}

/// Directed edge: the owning member is a child of `parent_id` within `hierarchy_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Parent {
    pub hierarchy_id: Identifier,
    pub parent_id: MemberIdentifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<RelationshipType>,
}

/// One member in a request or response graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Member {
    pub member_id: MemberIdentifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<Parent>>,
}

impl Member {
    pub fn new(member_id: MemberIdentifier) -> Self {
        Self { member_id, attributes: None, parents: None }
    }
}

/// Container for the members of one entity, the payload of create/update/delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMembers {
    pub model_id: Identifier,
    pub version_id: Identifier,
    pub entity_id: Identifier,
    pub member_type: MemberType,
    /// Staging changeset; absent means the mutation applies immediately
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changeset_id: Option<Identifier>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub members: Vec<Member>,
}

impl EntityMembers {
    /// Empty container scoped to model/version/entity.
    pub fn new(model: &str, version: &str, entity: &str, member_type: MemberType) -> Self {
        Self {
            model_id: Identifier::named(model),
            version_id: Identifier::named(version),
            entity_id: Identifier::named(entity),
            member_type,
            changeset_id: None,
            members: Vec::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_member_without_parents_omits_collection() {
        let member = Member::new(MemberIdentifier::by_code("A1", MemberType::Leaf));
        let json = serde_json::to_value(&member).unwrap();
        assert!(json.get("Parents").is_none());
        assert!(json.get("Attributes").is_none());
    }

    #[test]
    fn test_attribute_type_field_name() {
        let json = serde_json::to_value(Attribute::string(NAME_ATTRIBUTE, "Acme")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Identifier": {"Name": "Name"},
                "Type": "String",
                "Value": "Acme"
            })
        );
    }

    #[test]
    fn test_entity_members_deserializes_remote_payload() {
        let payload = serde_json::json!({
            "ModelId": {"Name": "Product"},
            "VersionId": {"Name": "VERSION_1"},
            "EntityId": {"Name": "Product"},
            "MemberType": "Consolidated",
            "Members": [{
                "MemberId": {"Code": "P1", "Name": "Bikes", "MemberType": "Consolidated"},
                "Attributes": [{"Identifier": {"Name": "Price"}, "Type": "Number", "Value": 12.5}]
            }]
        });
        let members: EntityMembers = serde_json::from_value(payload).unwrap();
        assert_eq!(members.member_type, MemberType::Consolidated);
        assert_eq!(members.changeset_id, None);
        let attrs = members.members[0].attributes.as_ref().unwrap();
        assert_eq!(attrs[0].value_type, AttributeValueType::Number);
        assert_eq!(attrs[0].value, serde_json::json!(12.5));
    }

    #[test]
    fn test_entity_members_tolerates_null_values() {
        let payload = serde_json::json!({
            "ModelId": {"Name": "Product"},
            "VersionId": {"Name": "VERSION_1"},
            "EntityId": {"Name": "Product"},
            "MemberType": "Leaf",
            "ChangesetId": null,
            "Members": null
        });
        let members: EntityMembers = serde_json::from_value(payload).unwrap();
        assert!(members.members.is_empty());

        let attribute: Attribute = serde_json::from_value(serde_json::json!({
            "Identifier": {"Name": "Color", "Id": null},
            "Type": null,
            "Value": null
        }))
        .unwrap();
        assert_eq!(attribute.value_type, AttributeValueType::default());
        assert_eq!(attribute.identifier, Identifier::named("Color"));
    }
}
