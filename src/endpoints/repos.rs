use serde::{Deserialize, Serialize};

use super::{Direction, Pagination};
use crate::endpoint::{Endpoint, PaginationHeaders};
use crate::repos::{
    BranchWithProtection, Commit, ContentListing, CreateFork, CreateHook,
    CreateRelease, CreateRepositoryRequest, Hook, MinimalRepository, Release,
    Repository, ShortBranch, UpdateRepository,
};

/// `GET /repos/{owner}/{repo}`
pub const GET: Endpoint<RepoParams, Repository> =
    Endpoint::new("repos/get", "repos");

/// `POST /user/repos`
pub const CREATE_FOR_AUTHENTICATED_USER: Endpoint<
    CreateRepositoryRequest,
    Repository,
> = Endpoint::new("repos/create-for-authenticated-user", "repos");

/// `POST /orgs/{org}/repos`
pub const CREATE_IN_ORG: Endpoint<CreateInOrgParams, Repository> =
    Endpoint::new("repos/create-in-org", "repos");

/// `PATCH /repos/{owner}/{repo}`
pub const UPDATE: Endpoint<UpdateParams, Repository> =
    Endpoint::new("repos/update", "repos");

/// `DELETE /repos/{owner}/{repo}`
pub const DELETE: Endpoint<RepoParams, ()> =
    Endpoint::new("repos/delete", "repos");

/// `GET /orgs/{org}/repos`
pub const LIST_FOR_ORG: Endpoint<
    ListForOrgParams,
    Vec<MinimalRepository>,
    PaginationHeaders,
> = Endpoint::new("repos/list-for-org", "repos");

/// `GET /users/{username}/repos`
pub const LIST_FOR_USER: Endpoint<
    ListForUserParams,
    Vec<MinimalRepository>,
    PaginationHeaders,
> = Endpoint::new("repos/list-for-user", "repos");

/// `GET /repos/{owner}/{repo}/branches`
pub const LIST_BRANCHES: Endpoint<
    ListBranchesParams,
    Vec<ShortBranch>,
    PaginationHeaders,
> = Endpoint::new("repos/list-branches", "repos");

/// `GET /repos/{owner}/{repo}/branches/{branch}`
pub const GET_BRANCH: Endpoint<BranchParams, BranchWithProtection> =
    Endpoint::new("repos/get-branch", "repos");

/// `GET /repos/{owner}/{repo}/commits`
pub const LIST_COMMITS: Endpoint<
    ListCommitsParams,
    Vec<Commit>,
    PaginationHeaders,
> = Endpoint::new("repos/list-commits", "repos");

/// `GET /repos/{owner}/{repo}/commits/{ref}` — unlike the listing,
/// this one carries `stats` and `files`.
pub const GET_COMMIT: Endpoint<GetCommitParams, Commit> =
    Endpoint::new("repos/get-commit", "repos");

/// `GET /repos/{owner}/{repo}/contents/{path}`
pub const GET_CONTENT: Endpoint<GetContentParams, ContentListing> =
    Endpoint::new("repos/get-content", "repos");

/// `GET /repos/{owner}/{repo}/forks`
pub const LIST_FORKS: Endpoint<
    ListForksParams,
    Vec<MinimalRepository>,
    PaginationHeaders,
> = Endpoint::new("repos/list-forks", "repos");

/// `POST /repos/{owner}/{repo}/forks` — forking is asynchronous, the
/// response is the new repository shell.
pub const CREATE_FORK: Endpoint<CreateForkParams, Repository> =
    Endpoint::new("repos/create-fork", "repos");

/// `GET /repos/{owner}/{repo}/releases`
pub const LIST_RELEASES: Endpoint<
    ListInRepoParams,
    Vec<Release>,
    PaginationHeaders,
> = Endpoint::new("repos/list-releases", "repos");

/// `GET /repos/{owner}/{repo}/releases/{release_id}`
pub const GET_RELEASE: Endpoint<GetReleaseParams, Release> =
    Endpoint::new("repos/get-release", "repos");

/// `POST /repos/{owner}/{repo}/releases`
pub const CREATE_RELEASE: Endpoint<CreateReleaseParams, Release> =
    Endpoint::new("repos/create-release", "repos");

/// `GET /repos/{owner}/{repo}/hooks`
pub const LIST_WEBHOOKS: Endpoint<
    ListInRepoParams,
    Vec<Hook>,
    PaginationHeaders,
> = Endpoint::new("repos/list-webhooks", "repos");

/// `POST /repos/{owner}/{repo}/hooks`
pub const CREATE_WEBHOOK: Endpoint<CreateWebhookParams, Hook> =
    Endpoint::new("repos/create-webhook", "repos");

/// `POST /repos/{owner}/{repo}/hooks/{hook_id}/pings`
pub const PING_WEBHOOK: Endpoint<WebhookParams, ()> =
    Endpoint::new("repos/ping-webhook", "repos");

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RepoParams {
    pub owner: String,
    pub repo: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateInOrgParams {
    pub org: String,
    #[serde(flatten)]
    pub body: CreateRepositoryRequest,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub body: UpdateRepository,
}

/// Repository type filter for org/user repo listings.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RepoTypeFilter {
    All,
    Public,
    Private,
    Forks,
    Sources,
    Member,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RepoSort {
    Created,
    Updated,
    Pushed,
    FullName,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListForOrgParams {
    pub org: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<RepoTypeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<RepoSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListForUserParams {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<RepoTypeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<RepoSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListBranchesParams {
    pub owner: String,
    pub repo: String,
    /// Limit to branches covered (or not) by branch protection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BranchParams {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListCommitsParams {
    pub owner: String,
    pub repo: String,
    /// SHA or branch to start listing commits from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// Only commits containing this file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GetCommitParams {
    pub owner: String,
    pub repo: String,
    pub r#ref: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GetContentParams {
    pub owner: String,
    pub repo: String,
    pub path: String,
    /// Commit/branch/tag, defaults to the default branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ForkSort {
    Newest,
    Oldest,
    Stargazers,
    Watchers,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListForksParams {
    pub owner: String,
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<ForkSort>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateForkParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub body: CreateFork,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListInRepoParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GetReleaseParams {
    pub owner: String,
    pub repo: String,
    pub release_id: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateReleaseParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub body: CreateRelease,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateWebhookParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub body: CreateHook,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WebhookParams {
    pub owner: String,
    pub repo: String,
    pub hook_id: i64,
}
