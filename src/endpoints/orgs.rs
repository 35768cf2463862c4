use serde::{Deserialize, Serialize};

use super::Pagination;
use crate::endpoint::{Endpoint, PaginationHeaders};
use crate::orgs::{
    OrganizationFull, OrganizationSimple, OrgMembership, OrgUpdate,
};
use crate::users::SimpleUser;

/// `GET /orgs/{org}`
pub const GET: Endpoint<OrgParams, OrganizationFull> =
    Endpoint::new("orgs/get", "orgs");

/// `GET /organizations` — all organizations, in ascending id order.
pub const LIST: Endpoint<ListParams, Vec<OrganizationSimple>, PaginationHeaders> =
    Endpoint::new("orgs/list", "orgs");

/// `PATCH /orgs/{org}`
pub const UPDATE: Endpoint<UpdateParams, OrganizationFull> =
    Endpoint::new("orgs/update", "orgs");

/// `GET /orgs/{org}/members`
pub const LIST_MEMBERS: Endpoint<
    ListMembersParams,
    Vec<SimpleUser>,
    PaginationHeaders,
> = Endpoint::new("orgs/list-members", "orgs");

/// `GET /orgs/{org}/memberships/{username}`
pub const GET_MEMBERSHIP_FOR_USER: Endpoint<MembershipParams, OrgMembership> =
    Endpoint::new("orgs/get-membership-for-user", "orgs");

/// `GET /user/orgs`
pub const LIST_FOR_AUTHENTICATED_USER: Endpoint<
    Pagination,
    Vec<OrganizationSimple>,
    PaginationHeaders,
> = Endpoint::new("orgs/list-for-authenticated-user", "orgs");

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrgParams {
    pub org: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ListParams {
    /// Only show organizations with an id greater than this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateParams {
    pub org: String,
    #[serde(flatten)]
    pub body: OrgUpdate,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberFilter {
    /// Members without two-factor authentication; owners only.
    #[serde(rename = "2fa_disabled")]
    TwoFaDisabled,
    All,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberRoleFilter {
    All,
    Admin,
    Member,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListMembersParams {
    pub org: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<MemberFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<MemberRoleFilter>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MembershipParams {
    pub org: String,
    pub username: String,
}
