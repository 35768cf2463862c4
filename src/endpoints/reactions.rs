use serde::{Deserialize, Serialize};

use super::Pagination;
use crate::endpoint::{Endpoint, PaginationHeaders};
use crate::reactions::{CreateReaction, Reaction, ReactionContent};

/// `GET /repos/{owner}/{repo}/issues/{issue_number}/reactions`
pub const LIST_FOR_ISSUE: Endpoint<
    ListForIssueParams,
    Vec<Reaction>,
    PaginationHeaders,
> = Endpoint::new("reactions/list-for-issue", "reactions");

/// `POST /repos/{owner}/{repo}/issues/{issue_number}/reactions` —
/// 200 with the existing reaction when it was already there, 201
/// otherwise.
pub const CREATE_FOR_ISSUE: Endpoint<CreateForIssueParams, Reaction> =
    Endpoint::new("reactions/create-for-issue", "reactions");

/// `GET /repos/{owner}/{repo}/issues/comments/{comment_id}/reactions`
pub const LIST_FOR_ISSUE_COMMENT: Endpoint<
    ListForIssueCommentParams,
    Vec<Reaction>,
    PaginationHeaders,
> = Endpoint::new("reactions/list-for-issue-comment", "reactions");

/// `POST /repos/{owner}/{repo}/issues/comments/{comment_id}/reactions`
pub const CREATE_FOR_ISSUE_COMMENT: Endpoint<
    CreateForIssueCommentParams,
    Reaction,
> = Endpoint::new("reactions/create-for-issue-comment", "reactions");

/// `DELETE /repos/{owner}/{repo}/issues/{issue_number}/reactions/{reaction_id}`
pub const DELETE_FOR_ISSUE: Endpoint<DeleteForIssueParams, ()> =
    Endpoint::new("reactions/delete-for-issue", "reactions");

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListForIssueParams {
    pub owner: String,
    pub repo: String,
    pub issue_number: usize,
    /// Only reactions with this content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ReactionContent>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateForIssueParams {
    pub owner: String,
    pub repo: String,
    pub issue_number: usize,
    #[serde(flatten)]
    pub body: CreateReaction,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListForIssueCommentParams {
    pub owner: String,
    pub repo: String,
    pub comment_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ReactionContent>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateForIssueCommentParams {
    pub owner: String,
    pub repo: String,
    pub comment_id: i64,
    #[serde(flatten)]
    pub body: CreateReaction,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DeleteForIssueParams {
    pub owner: String,
    pub repo: String,
    pub issue_number: usize,
    pub reaction_id: i64,
}
