//! # MDS Types
//!
//! Core types, wire model, and error definitions for the MDS gateway.
//!
//! This crate provides the foundational type system for the gateway:
//!
//! - **`error`** - Typed error hierarchy for the remote service and configuration
//! - **`models`** - Domain values (identifiers, members, changesets) and configuration
//! - **`protocol`** - Request/response shapes of the remote MDS operations
//!
//! ## Architecture Role
//!
//! `mds-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!            mds-types (this crate)
//!                    │
//!                    ▼
//!                mds-core
//!                    │
//!                    ▼
//!               mds-server
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde, with the remote service's PascalCase field names
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

mod de;
pub mod error;
pub mod models;
pub mod protocol;

// Re-export error types for convenience
pub use error::{ConfigError, UpstreamError};

// Re-export core model types
pub use models::{
    Attribute, AttributeValueType, Changeset, ChangesetStatus, EntityMembers, GatewayConfig,
    Identifier, Member, MemberIdentifier, MemberReturnOption, MemberType, MdsCredentials,
    MdsServiceConfig, Parent, RelationshipType, SearchTermQuoting, ServerConfig,
};
