//! Changeset model.

use serde::{Deserialize, Serialize};

use super::enums::ChangesetStatus;
use super::identifier::Identifier;

/// Named, stageable batch of pending member mutations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Changeset {
    pub identifier: Identifier,
    pub entity_id: Identifier,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub status: ChangesetStatus,
}
