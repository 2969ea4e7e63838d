//! Core domain models for the MDS gateway.
//!
//! Every value here is built fresh per call and discarded after the remote
//! call returns.

pub mod config;
mod changeset;
mod enums;
mod identifier;
mod member;

pub use changeset::Changeset;
pub use config::{GatewayConfig, MdsCredentials, MdsServiceConfig, SearchTermQuoting, ServerConfig};
pub use enums::{AttributeValueType, ChangesetStatus, MemberReturnOption, MemberType, RelationshipType};
pub use identifier::{Identifier, MemberIdentifier, ROOT_MEMBER_CODE};
pub use member::{Attribute, EntityMembers, Member, Parent, NAME_ATTRIBUTE};
