//! Closed enumerations of the MDS contract.
//!
//! Values are serialized by variant name (`"Leaf"`, `"Consolidated"`, ...) so an
//! unknown token is rejected at the boundary instead of being forwarded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MemberType {
    /// Member with no children
    Leaf,
    /// Aggregation node placed in an explicit hierarchy
    Consolidated,
    /// Named collection of members
    Collection,
    /// Hierarchy node
    Hierarchy,
    /// Membership of a member inside a collection
    CollectionMember,
}

impl MemberType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Leaf => "Leaf",
            Self::Consolidated => "Consolidated",
            Self::Collection => "Collection",
            Self::Hierarchy => "Hierarchy",
            Self::CollectionMember => "CollectionMember",
        }
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of hierarchy edge carried by a [`Parent`](super::Parent) entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RelationshipType {
    Parent,
    Sibling,
}

/// Lifecycle state of a changeset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ChangesetStatus {
    /// No status filter / unspecified state
    #[default]
    NotSpecified,
    Open,
    Pending,
    Approved,
    Rejected,
    Committed,
}

impl ChangesetStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotSpecified => "NotSpecified",
            Self::Open => "Open",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Committed => "Committed",
        }
    }
}

impl fmt::Display for ChangesetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value type of an [`Attribute`](super::Attribute).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum AttributeValueType {
    #[default]
    NotSpecified,
    String,
    Number,
    DateTime,
    Domain,
    File,
    Link,
}

/// How much member data a lookup asks the remote service to return.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MemberReturnOption {
    /// Full member data
    Data,
    /// Full member data plus counts
    DataAndCounts,
    /// Counts only
    Counts,
}
