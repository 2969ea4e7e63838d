// Changeset request builders: direct 1:1 mapping, no cross-validation.

use mds_types::protocol::{
    EntityMemberChangesetDeleteRequest, EntityMemberChangesetSaveRequest,
    EntityMemberChangesetsGetRequest,
};
use mds_types::{Changeset, Identifier};

use crate::gateway::params::{DeleteChangeset, GetChangesets, SaveChangeset};

pub fn build_save_request(params: &SaveChangeset) -> EntityMemberChangesetSaveRequest {
    let identifier = match params.changeset_id {
        Some(id) => Identifier::with_id(params.changeset_name.as_str(), id),
        None => Identifier::named(params.changeset_name.as_str()),
    };

    EntityMemberChangesetSaveRequest {
        model_id: Identifier::named(params.model_name.as_str()),
        version_id: Identifier::named(params.version_name.as_str()),
        changeset: Changeset {
            identifier,
            entity_id: Identifier::named(params.entity_name.as_str()),
            status: params.status,
        },
    }
}

pub fn build_delete_request(params: &DeleteChangeset) -> EntityMemberChangesetDeleteRequest {
    EntityMemberChangesetDeleteRequest {
        model_id: Identifier::named(params.model_name.as_str()),
        version_id: Identifier::named(params.version_name.as_str()),
        changeset_id: Identifier::named(params.changeset_name.as_str()),
    }
}

pub fn build_list_request(params: &GetChangesets) -> EntityMemberChangesetsGetRequest {
    EntityMemberChangesetsGetRequest {
        model_id: Identifier::named(params.model_name.as_str()),
        version_id: Identifier::named(params.version_name.as_str()),
        entity_id: Identifier::named(params.entity_name.as_str()),
        status: params.status,
    }
}
