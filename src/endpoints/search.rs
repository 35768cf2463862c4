use serde::{Deserialize, Serialize};

use super::Pagination;
use crate::endpoint::{Endpoint, PaginationHeaders};
use crate::search::{
    CodeSearchItem, CommitSearchItem, IssueSearchItem, LabelSearchItem,
    RepoSearchItem, SearchOrder, SearchResults, SearchSort, UserSearchItem,
};

/// `GET /search/repositories`
pub const REPOS: Endpoint<
    QueryParams,
    SearchResults<RepoSearchItem>,
    PaginationHeaders,
> = Endpoint::new("search/repos", "search");

/// `GET /search/issues` — one index for both; `is:pr`/`is:issue`
/// qualifiers split them.
pub const ISSUES_AND_PULL_REQUESTS: Endpoint<
    QueryParams,
    SearchResults<IssueSearchItem>,
    PaginationHeaders,
> = Endpoint::new("search/issues-and-pull-requests", "search");

/// `GET /search/code` — requires a `user:`, `org:` or `repo:`
/// qualifier in the query.
pub const CODE: Endpoint<
    QueryParams,
    SearchResults<CodeSearchItem>,
    PaginationHeaders,
> = Endpoint::new("search/code", "search");

/// `GET /search/users`
pub const USERS: Endpoint<
    QueryParams,
    SearchResults<UserSearchItem>,
    PaginationHeaders,
> = Endpoint::new("search/users", "search");

/// `GET /search/labels`
pub const LABELS: Endpoint<
    LabelQueryParams,
    SearchResults<LabelSearchItem>,
    PaginationHeaders,
> = Endpoint::new("search/labels", "search");

/// `GET /search/commits`
pub const COMMITS: Endpoint<
    QueryParams,
    SearchResults<CommitSearchItem>,
    PaginationHeaders,
> = Endpoint::new("search/commits", "search");

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct QueryParams {
    /// The search keywords plus any qualifiers.
    pub q: String,
    /// Omitted means best-match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SearchOrder>,
    #[serde(flatten)]
    pub page: Pagination,
}

/// Label search scopes to a single repository by id rather than by
/// qualifier.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LabelQueryParams {
    pub repository_id: i64,
    pub q: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SearchOrder>,
    #[serde(flatten)]
    pub page: Pagination,
}
