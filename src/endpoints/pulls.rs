use serde::{Deserialize, Serialize};

use super::{Direction, Pagination, StateFilter};
use crate::endpoint::{Endpoint, PaginationHeaders};
use crate::pulls::{
    CreateReview, MergeRequest, MergeResult, PullRequest, PullRequestCreate,
    PullRequestUpdate, RequestedReviewers, Review, ReviewComment,
};
use crate::repos::{Commit, DiffEntry};

/// `GET /repos/{owner}/{repo}/pulls`
pub const LIST: Endpoint<ListParams, Vec<PullRequest>, PaginationHeaders> =
    Endpoint::new("pulls/list", "pulls");

/// `GET /repos/{owner}/{repo}/pulls/{pull_number}`
pub const GET: Endpoint<PullParams, PullRequest> =
    Endpoint::new("pulls/get", "pulls");

/// `POST /repos/{owner}/{repo}/pulls`
pub const CREATE: Endpoint<CreateParams, PullRequest> =
    Endpoint::new("pulls/create", "pulls");

/// `PATCH /repos/{owner}/{repo}/pulls/{pull_number}`
pub const UPDATE: Endpoint<UpdateParams, PullRequest> =
    Endpoint::new("pulls/update", "pulls");

/// `GET /repos/{owner}/{repo}/pulls/{pull_number}/commits`
pub const LIST_COMMITS: Endpoint<
    PullPagedParams,
    Vec<Commit>,
    PaginationHeaders,
> = Endpoint::new("pulls/list-commits", "pulls");

/// `GET /repos/{owner}/{repo}/pulls/{pull_number}/files`
pub const LIST_FILES: Endpoint<
    PullPagedParams,
    Vec<DiffEntry>,
    PaginationHeaders,
> = Endpoint::new("pulls/list-files", "pulls");

/// `GET /repos/{owner}/{repo}/pulls/{pull_number}/merge` — 204 when
/// merged, 404 otherwise; no body either way.
pub const CHECK_IF_MERGED: Endpoint<PullParams, ()> =
    Endpoint::new("pulls/check-if-merged", "pulls");

/// `PUT /repos/{owner}/{repo}/pulls/{pull_number}/merge`
pub const MERGE: Endpoint<MergeParams, MergeResult> =
    Endpoint::new("pulls/merge", "pulls");

/// `GET /repos/{owner}/{repo}/pulls/{pull_number}/reviews`
pub const LIST_REVIEWS: Endpoint<
    PullPagedParams,
    Vec<Review>,
    PaginationHeaders,
> = Endpoint::new("pulls/list-reviews", "pulls");

/// `POST /repos/{owner}/{repo}/pulls/{pull_number}/reviews`
pub const CREATE_REVIEW: Endpoint<CreateReviewParams, Review> =
    Endpoint::new("pulls/create-review", "pulls");

/// `GET /repos/{owner}/{repo}/pulls/{pull_number}/comments`
pub const LIST_REVIEW_COMMENTS: Endpoint<
    PullPagedParams,
    Vec<ReviewComment>,
    PaginationHeaders,
> = Endpoint::new("pulls/list-review-comments", "pulls");

/// `GET /repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers`
pub const LIST_REQUESTED_REVIEWERS: Endpoint<PullParams, RequestedReviewers> =
    Endpoint::new("pulls/list-requested-reviewers", "pulls");

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PullParams {
    pub owner: String,
    pub repo: String,
    pub pull_number: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PullPagedParams {
    pub owner: String,
    pub repo: String,
    pub pull_number: usize,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PullSort {
    Created,
    Updated,
    Popularity,
    /// Age, but filtering to pulls older than a month.
    LongRunning,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListParams {
    pub owner: String,
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateFilter>,
    /// Filter by head, `user:ref-name` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    /// Filter by base branch name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<PullSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub body: PullRequestCreate,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateParams {
    pub owner: String,
    pub repo: String,
    pub pull_number: usize,
    #[serde(flatten)]
    pub body: PullRequestUpdate,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MergeParams {
    pub owner: String,
    pub repo: String,
    pub pull_number: usize,
    #[serde(flatten)]
    pub body: MergeRequest,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateReviewParams {
    pub owner: String,
    pub repo: String,
    pub pull_number: usize,
    #[serde(flatten)]
    pub body: CreateReview,
}
