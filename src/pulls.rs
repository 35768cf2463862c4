use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::issues::{AuthorAssociation, IssueState, Label, Milestone};
use crate::repos::Repository;
use crate::users::SimpleUser;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PullRequest {
    pub id: i64,
    pub node_id: String,
    #[serde(flatten)]
    pub urls: PullRequestUrls,
    /// Number uniquely identifying the pull request within its repository.
    pub number: usize,
    pub state: IssueState,
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_lock_reason: Option<String>,
    /// The title of the pull request.
    pub title: String,
    pub body: Option<String>,
    pub user: Option<SimpleUser>,
    pub labels: Vec<Label>,
    pub milestone: Option<Milestone>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,
    pub merge_commit_sha: Option<String>,
    pub assignee: Option<SimpleUser>,
    // these lists are all marked nullable in the schema, but an empty
    // list is what actually comes back
    #[serde(default)]
    pub assignees: Vec<SimpleUser>,
    #[serde(default)]
    pub requested_reviewers: Vec<SimpleUser>,
    pub head: PullRequestHead,
    pub base: PullRequestBase,
    pub author_association: AuthorAssociation,
    pub draft: bool,
    pub merged: bool,
    pub mergeable: Option<bool>,
    pub rebaseable: Option<bool>,
    /// One of `behind`, `blocked`, `clean`, `dirty`, `draft`,
    /// `has_hooks`, `unknown`, `unstable`; stringly typed upstream.
    pub mergeable_state: String,
    pub merged_by: Option<SimpleUser>,
    pub comments: usize,
    pub review_comments: usize,
    /// Indicates whether maintainers can modify the pull request.
    pub maintainer_can_modify: bool,
    pub commits: usize,
    pub additions: usize,
    pub deletions: usize,
    pub changed_files: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PullRequestUrls {
    pub url: String,
    pub html_url: String,
    pub diff_url: String,
    pub patch_url: String,
    pub issue_url: String,
    pub commits_url: String,
    pub review_comments_url: String,
    pub review_comment_url: String,
    pub comments_url: String,
    pub statuses_url: String,
}

// head and base are near-identical but for the nullable repo on the
// head side (the fork may have been deleted)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PullRequestHead {
    pub sha: String,
    pub label: String,
    pub r#ref: String,
    pub repo: Option<Box<Repository>>,
    pub user: Option<SimpleUser>,
}
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PullRequestBase {
    pub sha: String,
    pub label: String,
    pub r#ref: String,
    pub repo: Box<Repository>,
    pub user: Option<SimpleUser>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PullRequestCreate {
    /// The name of the branch where your changes are implemented,
    /// `user:branch` for cross-repository pull requests.
    pub head: String,
    /// The name of the branch you want the changes pulled into.
    pub base: String,
    #[serde(flatten)]
    pub source: PullRequestSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,
}

/// A pull request is opened either with a fresh title or by converting
/// an existing issue.
#[derive(Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum PullRequestSource {
    FromTitle { title: String },
    FromIssue { issue: usize },
}

#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct PullRequestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    Merge,
    Squash,
    Rebase,
}

#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct MergeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    /// SHA the head must be at for the merge to go through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_method: Option<MergeMethod>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MergeResult {
    pub sha: String,
    pub merged: bool,
    pub message: String,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreateReviewEvent {
    Approve,
    RequestChanges,
    Comment,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    Pending,
    Approved,
    ChangesRequested,
    Commented,
    Dismissed,
}
impl From<Option<CreateReviewEvent>> for ReviewState {
    fn from(s: Option<CreateReviewEvent>) -> Self {
        match s {
            None => Self::Pending,
            Some(CreateReviewEvent::Approve) => Self::Approved,
            Some(CreateReviewEvent::RequestChanges) => Self::ChangesRequested,
            Some(CreateReviewEvent::Comment) => Self::Commented,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Review {
    pub id: i64,
    pub node_id: String,
    pub user: Option<SimpleUser>,
    pub body: String,
    pub state: ReviewState,
    /// Absent while the review is pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    pub commit_id: Option<String>,
    pub author_association: AuthorAssociation,
    pub html_url: String,
    pub pull_request_url: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateReview {
    pub body: String,
    /// Defaults to `PENDING` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<CreateReviewEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<DraftReviewComment>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DraftReviewComment {
    pub path: String,
    pub body: String,
    #[serde(flatten)]
    pub position: ReviewCommentPosition,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum ReviewCommentPosition {
    /// Line position in the unified diff hunk.
    InHunk { position: usize },
    /// Positioning (possibly a span) in the blobs themselves.
    InBlob {
        side: ReviewCommentSide,
        line: usize,
        #[serde(flatten)]
        start: Option<ReviewCommentStart>,
    },
}
#[derive(Serialize, Deserialize, Debug)]
pub struct ReviewCommentStart {
    #[serde(rename = "start_side")]
    pub side: ReviewCommentSide,
    #[serde(rename = "start_line")]
    pub line: usize,
}
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewCommentSide {
    Left,
    Right,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReviewComment {
    pub id: i64,
    pub node_id: String,
    pub pull_request_review_id: Option<i64>,
    pub url: String,
    pub html_url: String,
    pub pull_request_url: String,
    pub diff_hunk: String,
    pub path: String,
    pub commit_id: String,
    pub original_commit_id: String,
    pub body: String,
    pub user: SimpleUser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_reply_to_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_association: AuthorAssociation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<ReviewCommentSide>,
}

/// Response of `GET …/requested_reviewers`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RequestedReviewers {
    pub users: Vec<SimpleUser>,
    pub teams: Vec<crate::teams::Team>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_from_title_or_issue() {
        let c: PullRequestCreate = serde_json::from_value(json!({
            "head": "octocat:new-topic",
            "base": "master",
            "title": "Amazing new feature"
        }))
        .unwrap();
        assert!(matches!(c.source, PullRequestSource::FromTitle { .. }));
        assert!(!c.draft);

        let c: PullRequestCreate = serde_json::from_value(json!({
            "head": "new-topic",
            "base": "master",
            "issue": 1347
        }))
        .unwrap();
        assert!(matches!(
            c.source,
            PullRequestSource::FromIssue { issue: 1347 }
        ));
        // the flattened source folds back into the body
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["issue"], 1347);
        assert!(v.get("title").is_none());
    }

    #[test]
    fn review_comment_positions() {
        let c: DraftReviewComment = serde_json::from_value(json!({
            "path": "file1.txt",
            "body": "nit",
            "position": 4
        }))
        .unwrap();
        assert!(matches!(
            c.position,
            ReviewCommentPosition::InHunk { position: 4 }
        ));

        let c: DraftReviewComment = serde_json::from_value(json!({
            "path": "file1.txt",
            "body": "span comment",
            "side": "RIGHT",
            "line": 12,
            "start_side": "RIGHT",
            "start_line": 10
        }))
        .unwrap();
        match c.position {
            ReviewCommentPosition::InBlob { line, start, .. } => {
                assert_eq!(line, 12);
                assert_eq!(start.unwrap().line, 10);
            }
            other => panic!("expected blob position, got {other:?}"),
        }
    }

    #[test]
    fn review_state_from_event() {
        assert_eq!(ReviewState::from(None), ReviewState::Pending);
        assert_eq!(
            ReviewState::from(Some(CreateReviewEvent::RequestChanges)),
            ReviewState::ChangesRequested
        );
    }
}
