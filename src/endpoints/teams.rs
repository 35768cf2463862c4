use serde::{Deserialize, Serialize};

use super::Pagination;
use crate::endpoint::{Endpoint, PaginationHeaders};
use crate::repos::MinimalRepository;
use crate::teams::{Team, TeamCreate, TeamFull, TeamMembership, TeamRole};
use crate::users::SimpleUser;

/// `GET /orgs/{org}/teams`
pub const LIST: Endpoint<ListParams, Vec<Team>, PaginationHeaders> =
    Endpoint::new("teams/list", "teams");

/// `GET /orgs/{org}/teams/{team_slug}`
pub const GET_BY_NAME: Endpoint<TeamParams, TeamFull> =
    Endpoint::new("teams/get-by-name", "teams");

/// `POST /orgs/{org}/teams`
pub const CREATE: Endpoint<CreateParams, TeamFull> =
    Endpoint::new("teams/create", "teams");

/// `GET /orgs/{org}/teams/{team_slug}/members`
pub const LIST_MEMBERS_IN_ORG: Endpoint<
    ListMembersParams,
    Vec<SimpleUser>,
    PaginationHeaders,
> = Endpoint::new("teams/list-members-in-org", "teams");

/// `GET /orgs/{org}/teams/{team_slug}/memberships/{username}`
pub const GET_MEMBERSHIP_FOR_USER_IN_ORG: Endpoint<
    MembershipParams,
    TeamMembership,
> = Endpoint::new("teams/get-membership-for-user-in-org", "teams");

/// `GET /orgs/{org}/teams/{team_slug}/repos`
pub const LIST_REPOS_IN_ORG: Endpoint<
    TeamPagedParams,
    Vec<MinimalRepository>,
    PaginationHeaders,
> = Endpoint::new("teams/list-repos-in-org", "teams");

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListParams {
    pub org: String,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamParams {
    pub org: String,
    pub team_slug: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateParams {
    pub org: String,
    #[serde(flatten)]
    pub body: TeamCreate,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListMembersParams {
    pub org: String,
    pub team_slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<TeamRole>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MembershipParams {
    pub org: String,
    pub team_slug: String,
    pub username: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamPagedParams {
    pub org: String,
    pub team_slug: String,
    #[serde(flatten)]
    pub page: Pagination,
}
