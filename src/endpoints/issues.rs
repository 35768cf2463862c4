use serde::{Deserialize, Serialize};

use super::{Direction, Pagination, StateFilter};
use crate::endpoint::{Endpoint, PaginationHeaders};
use crate::issues::{
    AddLabels, CommentCreate, Issue, IssueComment, IssueCreate, IssueUpdate,
    Label, Milestone,
};

/// `GET /repos/{owner}/{repo}/issues` — also returns pull requests;
/// consumers filter on `pull_request`.
pub const LIST_FOR_REPO: Endpoint<
    ListForRepoParams,
    Vec<Issue>,
    PaginationHeaders,
> = Endpoint::new("issues/list-for-repo", "issues");

/// `GET /repos/{owner}/{repo}/issues/{issue_number}`
pub const GET: Endpoint<IssueParams, Issue> =
    Endpoint::new("issues/get", "issues");

/// `POST /repos/{owner}/{repo}/issues`
pub const CREATE: Endpoint<CreateParams, Issue> =
    Endpoint::new("issues/create", "issues");

/// `PATCH /repos/{owner}/{repo}/issues/{issue_number}`
pub const UPDATE: Endpoint<UpdateParams, Issue> =
    Endpoint::new("issues/update", "issues");

/// `GET /repos/{owner}/{repo}/issues/{issue_number}/comments`
pub const LIST_COMMENTS: Endpoint<
    ListCommentsParams,
    Vec<IssueComment>,
    PaginationHeaders,
> = Endpoint::new("issues/list-comments", "issues");

/// `POST /repos/{owner}/{repo}/issues/{issue_number}/comments`
pub const CREATE_COMMENT: Endpoint<CreateCommentParams, IssueComment> =
    Endpoint::new("issues/create-comment", "issues");

/// `PATCH /repos/{owner}/{repo}/issues/comments/{comment_id}`
pub const UPDATE_COMMENT: Endpoint<UpdateCommentParams, IssueComment> =
    Endpoint::new("issues/update-comment", "issues");

/// `DELETE /repos/{owner}/{repo}/issues/comments/{comment_id}`
pub const DELETE_COMMENT: Endpoint<CommentParams, ()> =
    Endpoint::new("issues/delete-comment", "issues");

/// `GET /repos/{owner}/{repo}/labels`
pub const LIST_LABELS_FOR_REPO: Endpoint<
    ListInRepoParams,
    Vec<Label>,
    PaginationHeaders,
> = Endpoint::new("issues/list-labels-for-repo", "issues");

/// `POST /repos/{owner}/{repo}/issues/{issue_number}/labels`
pub const ADD_LABELS: Endpoint<AddLabelsParams, Vec<Label>> =
    Endpoint::new("issues/add-labels", "issues");

/// `GET /repos/{owner}/{repo}/milestones`
pub const LIST_MILESTONES: Endpoint<
    ListMilestonesParams,
    Vec<Milestone>,
    PaginationHeaders,
> = Endpoint::new("issues/list-milestones", "issues");

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct IssueParams {
    pub owner: String,
    pub repo: String,
    pub issue_number: usize,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueSort {
    Created,
    Updated,
    Comments,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListForRepoParams {
    pub owner: String,
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateFilter>,
    /// Label names, comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    /// `*` for any assignee, `none` for none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentioned: Option<String>,
    /// Milestone number, `*`, or `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<IssueSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Only issues updated at or after this ISO 8601 timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub body: IssueCreate,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateParams {
    pub owner: String,
    pub repo: String,
    pub issue_number: usize,
    #[serde(flatten)]
    pub body: IssueUpdate,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListCommentsParams {
    pub owner: String,
    pub repo: String,
    pub issue_number: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateCommentParams {
    pub owner: String,
    pub repo: String,
    pub issue_number: usize,
    #[serde(flatten)]
    pub body: CommentCreate,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateCommentParams {
    pub owner: String,
    pub repo: String,
    pub comment_id: i64,
    #[serde(flatten)]
    pub body: CommentCreate,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CommentParams {
    pub owner: String,
    pub repo: String,
    pub comment_id: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListInRepoParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AddLabelsParams {
    pub owner: String,
    pub repo: String,
    pub issue_number: usize,
    #[serde(flatten)]
    pub body: AddLabels,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneSort {
    DueOn,
    Completeness,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListMilestonesParams {
    pub owner: String,
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<MilestoneSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn params_flatten_into_one_object() {
        let p = CreateParams {
            owner: "octocat".into(),
            repo: "Hello-World".into(),
            body: serde_json::from_value(json!({ "title": "Found a bug" }))
                .unwrap(),
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(
            v,
            json!({
                "owner": "octocat",
                "repo": "Hello-World",
                "title": "Found a bug"
            })
        );
    }

    #[test]
    fn milestone_sort_wire_name() {
        assert_eq!(
            serde_json::to_value(MilestoneSort::DueOn).unwrap(),
            json!("due_on")
        );
    }
}
