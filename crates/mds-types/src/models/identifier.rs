//! Resource and member references.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::MemberType;

/// Code of the sentinel parent that stands for a hierarchy's root node.
pub const ROOT_MEMBER_CODE: &str = "ROOT";

/// Reference to a named resource (model, version, entity, hierarchy, changeset).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Identifier {
    /// Remote GUID, only set when the caller knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Omitted entirely when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Identifier {
    /// Reference by name only.
    pub fn named(name: impl Into<String>) -> Self {
        Self { id: None, name: Some(name.into()) }
    }

    /// Reference by name and remote GUID.
    pub fn with_id(name: impl Into<String>, id: Uuid) -> Self {
        Self { id: Some(id), name: Some(name.into()) }
    }

    /// Reference that names nothing. Serializes as an empty object.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// `Some(named(..))` for a non-empty name, `None` otherwise.
    pub fn optional(name: Option<&str>) -> Option<Self> {
        name.filter(|n| !n.is_empty()).map(Self::named)
    }
}

/// Reference to a member by name, code, and type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct MemberIdentifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_type: Option<MemberType>,
}

impl MemberIdentifier {
    /// Reference used when creating a member: name, code, and type.
    pub fn new_member(
        name: impl Into<String>,
        code: impl Into<String>,
        member_type: MemberType,
    ) -> Self {
        Self { name: Some(name.into()), code: Some(code.into()), member_type: Some(member_type) }
    }

    /// Reference by code and type (name omitted).
    pub fn by_code(code: impl Into<String>, member_type: MemberType) -> Self {
        Self { name: None, code: Some(code.into()), member_type: Some(member_type) }
    }

    /// Sentinel reference to the root of a hierarchy. Carries the code only.
    pub fn root() -> Self {
        Self { name: None, code: Some(ROOT_MEMBER_CODE.to_string()), member_type: None }
    }

    pub fn is_root(&self) -> bool {
        self.code.as_deref() == Some(ROOT_MEMBER_CODE)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_identifier_skips_empty_names() {
        assert_eq!(Identifier::optional(None), None);
        assert_eq!(Identifier::optional(Some("")), None);
        assert_eq!(Identifier::optional(Some("cs1")), Some(Identifier::named("cs1")));
    }

    #[test]
    fn test_root_reference_serializes_code_only() {
        let json = serde_json::to_value(MemberIdentifier::root()).unwrap();
        assert_eq!(json, serde_json::json!({"Code": "ROOT"}));
        assert!(MemberIdentifier::root().is_root());
    }

    #[test]
    fn test_identifier_omits_missing_id() {
        let json = serde_json::to_value(Identifier::named("Product")).unwrap();
        assert_eq!(json, serde_json::json!({"Name": "Product"}));
        assert_eq!(serde_json::to_value(Identifier::unnamed()).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_identifier_accepts_null_name() {
        let id: Identifier = serde_json::from_value(serde_json::json!({
            "Id": "5d2c2e9a-8f0b-4c53-9d55-0b8e7a3c1f10",
            "Name": null
        }))
        .unwrap();
        assert!(id.id.is_some());
        assert_eq!(id.name, None);
    }
}
