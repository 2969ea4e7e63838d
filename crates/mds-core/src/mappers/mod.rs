// Mappers module - flat caller parameters to remote request graphs.
// The only place member-type and changeset rules live.

pub mod changesets;
pub mod members;
pub mod search_term;

pub use search_term::{build_search_term, SearchField};
