// Entity member request builders.
// Every builder is pure: flat parameters in, one fully-shaped request out.

use mds_types::protocol::{
    EntityMembersCreateRequest, EntityMembersDeleteRequest, EntityMembersGetCriteria,
    EntityMembersGetRequest, EntityMembersUpdateRequest,
};
use mds_types::{
    Attribute, EntityMembers, Identifier, Member, MemberIdentifier, MemberReturnOption,
    MemberType, Parent, RelationshipType, SearchTermQuoting,
};

use super::search_term::{build_search_term, SearchField};
use crate::gateway::params::{
    CreateEntityMember, DeleteEntityMember, GetEntityMemberByCode, GetEntityMemberByName,
    UpdateEntityMember, UpdateEntityMemberRelationship,
};

/// Build the create request for one new member.
///
/// A `Consolidated` member is attached under the root of `hierarchy_name`; any
/// other type gets no `Parents` collection and the hierarchy is ignored.
pub fn build_create_request(params: &CreateEntityMember) -> EntityMembersCreateRequest {
    let mut member = Member::new(MemberIdentifier::new_member(
        params.member_name.as_str(),
        params.member_code.as_str(),
        params.member_type,
    ));

    if params.member_type == MemberType::Consolidated {
        member.parents = Some(vec![Parent {
            hierarchy_id: params
                .hierarchy_name
                .as_deref()
                .map_or_else(Identifier::unnamed, Identifier::named),
            parent_id: MemberIdentifier::root(),
            relationship_type: None,
        }]);
    }

    let mut members = EntityMembers::new(
        &params.model_name,
        &params.version_name,
        &params.entity_name,
        params.member_type,
    );
    members.changeset_id = Identifier::optional(params.changeset_name.as_deref());
    members.members.push(member);

    EntityMembersCreateRequest { members, return_created_identifiers: true }
}

/// Lookup by member name.
pub fn build_get_by_name_request(
    params: &GetEntityMemberByName,
    quoting: SearchTermQuoting,
) -> EntityMembersGetRequest {
    build_get_request(
        &params.model_name,
        &params.version_name,
        &params.entity_name,
        params.member_type,
        build_search_term(SearchField::Name, &params.member_name, quoting),
    )
}

/// Lookup by member code.
pub fn build_get_by_code_request(
    params: &GetEntityMemberByCode,
    quoting: SearchTermQuoting,
) -> EntityMembersGetRequest {
    build_get_request(
        &params.model_name,
        &params.version_name,
        &params.entity_name,
        params.member_type,
        build_search_term(SearchField::Code, &params.member_code, quoting),
    )
}

fn build_get_request(
    model: &str,
    version: &str,
    entity: &str,
    member_type: MemberType,
    search_term: String,
) -> EntityMembersGetRequest {
    EntityMembersGetRequest {
        members_get_criteria: EntityMembersGetCriteria {
            model_id: Identifier::named(model),
            version_id: Identifier::named(version),
            entity_id: Identifier::named(entity),
            member_type,
            member_return_option: MemberReturnOption::Data,
            search_term,
        },
    }
}

/// Rename a member identified by code.
///
/// The container type is always `Leaf`, independent of the caller's type,
/// which only lands on the member reference.
pub fn build_rename_request(params: &UpdateEntityMember) -> EntityMembersUpdateRequest {
    let mut member =
        Member::new(MemberIdentifier::by_code(params.member_code.as_str(), params.member_type));
    member.attributes = Some(vec![Attribute::string(
        mds_types::models::NAME_ATTRIBUTE,
        params.new_member_name.as_str(),
    )]);

    let mut members = EntityMembers::new(
        &params.model_name,
        &params.version_name,
        &params.entity_name,
        MemberType::Leaf,
    );
    members.changeset_id = Identifier::optional(params.changeset_name.as_deref());
    members.members.push(member);

    EntityMembersUpdateRequest { members }
}

/// Move a leaf under a consolidated parent within one hierarchy.
///
/// Never staged: there is no changeset on this request. Container type is
/// `Leaf` because it describes the child being updated.
pub fn build_relationship_request(
    params: &UpdateEntityMemberRelationship,
) -> EntityMembersUpdateRequest {
    let mut child =
        Member::new(MemberIdentifier::by_code(params.child_member_code.as_str(), MemberType::Leaf));
    child.attributes = Some(Vec::new());
    child.parents = Some(vec![Parent {
        hierarchy_id: Identifier::named(params.hierarchy_name.as_str()),
        parent_id: MemberIdentifier::by_code(
            params.parent_member_code.as_str(),
            MemberType::Consolidated,
        ),
        relationship_type: Some(RelationshipType::Parent),
    }]);

    let mut members = EntityMembers::new(
        &params.model_name,
        &params.version_name,
        &params.entity_name,
        MemberType::Leaf,
    );
    members.members.push(child);

    EntityMembersUpdateRequest { members }
}

/// Delete a member identified by code. Container type is the caller's type.
pub fn build_delete_request(params: &DeleteEntityMember) -> EntityMembersDeleteRequest {
    let member =
        Member::new(MemberIdentifier::by_code(params.member_code.as_str(), params.member_type));

    let mut members = EntityMembers::new(
        &params.model_name,
        &params.version_name,
        &params.entity_name,
        params.member_type,
    );
    members.changeset_id = Identifier::optional(params.changeset_name.as_deref());
    members.members.push(member);

    EntityMembersDeleteRequest { members }
}

#[cfg(test)]
#[path = "members_tests.rs"]
mod members_tests;
