use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::reactions::ReactionRollup;
use crate::repos::Repository;
use crate::users::SimpleUser;

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    Open,
    Closed,
}
impl IssueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StateReason {
    Completed,
    Reopened,
    NotPlanned,
    Duplicate,
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorAssociation {
    Collaborator,
    Contributor,
    FirstTimer,
    FirstTimeContributor,
    Mannequin,
    Member,
    None,
    Owner,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Label {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub name: String,
    pub description: Option<String>,
    /// 6-character hex code, without the leading #.
    pub color: String,
    pub default: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Milestone {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub labels_url: String,
    /// The number of the milestone.
    pub number: usize,
    pub state: IssueState,
    /// The title of the milestone.
    pub title: String,
    pub description: Option<String>,
    pub creator: Option<SimpleUser>,
    pub open_issues: usize,
    pub closed_issues: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub due_on: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Issue {
    pub id: i64,
    pub node_id: String,
    #[serde(flatten)]
    pub urls: IssueUrls,
    /// Number uniquely identifying the issue within its repository.
    pub number: usize,
    pub state: IssueState,
    /// The reason for the current state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<StateReason>,
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_lock_reason: Option<String>,
    /// Title of the issue.
    pub title: String,
    pub body: Option<String>,
    pub user: Option<SimpleUser>,
    pub labels: Vec<Label>,
    pub milestone: Option<Milestone>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_by: Option<SimpleUser>,
    pub assignee: Option<SimpleUser>,
    pub assignees: Vec<SimpleUser>,
    pub author_association: AuthorAssociation,
    pub comments: usize,
    /// Set when the issue is the issue-ish face of a pull request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<IssuePullRequestLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Box<Repository>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<ReactionRollup>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct IssueUrls {
    pub url: String,
    pub repository_url: String,
    pub labels_url: String,
    pub comments_url: String,
    pub events_url: String,
    pub html_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct IssuePullRequestLink {
    pub url: Option<String>,
    pub html_url: Option<String>,
    pub diff_url: Option<String>,
    pub patch_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<DateTime<Utc>>,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Number(i64),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => Ok(s),
        StringOrInt::Number(i) => Ok(i.to_string()),
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct IssueCreate {
    /// The title of the issue; GitHub accepts a bare number here and
    /// stringifies it.
    #[serde(deserialize_with = "number_or_string")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Issue types, stringly typed, configured at the organisation level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Deprecated assignee field, q: how does it combine with assignees?
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<MilestoneSelector>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<CreateIssueLabel>,
}

/// Milestones can be selected by number or by title.
#[derive(Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum MilestoneSelector {
    Int(usize),
    String(String),
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum CreateIssueLabel {
    String(String),
    Label {
        id: i64,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
}

#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct IssueUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
    #[serde(
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub state_reason: Option<Option<StateReason>>,
    #[serde(
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub milestone: Option<Option<MilestoneSelector>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CreateIssueLabel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct IssueComment {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub issue_url: String,
    pub body: Option<String>,
    pub user: Option<SimpleUser>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_association: AuthorAssociation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<ReactionRollup>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CommentCreate {
    /// The contents of the comment.
    pub body: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AddLabels {
    pub labels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn issue_create_numeric_title() {
        let c: IssueCreate =
            serde_json::from_value(json!({ "title": 512 })).unwrap();
        assert_eq!(c.title, "512");
        let c: IssueCreate =
            serde_json::from_value(json!({ "title": "Found a bug" })).unwrap();
        assert_eq!(c.title, "Found a bug");
    }

    #[test]
    fn issue_create_label_forms() {
        let c: IssueCreate = serde_json::from_value(json!({
            "title": "x",
            "labels": ["bug", { "id": 208045946, "name": "bug", "color": "f29513" }],
            "milestone": "v1.0"
        }))
        .unwrap();
        assert!(matches!(c.labels[0], CreateIssueLabel::String(_)));
        assert!(matches!(c.labels[1], CreateIssueLabel::Label { .. }));
        assert!(matches!(c.milestone, Some(MilestoneSelector::String(_))));
        // empty collections serialize away
        let v = serde_json::to_value(IssueCreate {
            title: "x".into(),
            body: None,
            r#type: None,
            assignee: None,
            assignees: vec![],
            milestone: None,
            labels: vec![],
        })
        .unwrap();
        assert!(v.get("labels").is_none());
        assert!(v.get("assignees").is_none());
    }

    #[test]
    fn issue_update_clearing_milestone() {
        let u: IssueUpdate = serde_json::from_value(json!({
            "state": "closed",
            "state_reason": "not_planned",
            "milestone": null
        }))
        .unwrap();
        assert_eq!(u.state, Some(IssueState::Closed));
        assert!(matches!(u.state_reason, Some(Some(StateReason::NotPlanned))));
        assert!(matches!(u.milestone, Some(None)));
        assert!(u.body.is_none());
    }

    #[test]
    fn issue_flattened_urls() {
        let issue: Issue = serde_json::from_value(json!({
            "id": 1,
            "node_id": "MDU6SXNzdWUx",
            "url": "https://api.github.com/repos/octocat/Hello-World/issues/1347",
            "repository_url": "https://api.github.com/repos/octocat/Hello-World",
            "labels_url": "https://api.github.com/repos/octocat/Hello-World/issues/1347/labels{/name}",
            "comments_url": "https://api.github.com/repos/octocat/Hello-World/issues/1347/comments",
            "events_url": "https://api.github.com/repos/octocat/Hello-World/issues/1347/events",
            "html_url": "https://github.com/octocat/Hello-World/issues/1347",
            "number": 1347,
            "state": "open",
            "locked": false,
            "title": "Found a bug",
            "body": "I'm having a problem with this.",
            "user": null,
            "labels": [],
            "milestone": null,
            "created_at": "2011-04-22T13:33:48Z",
            "updated_at": "2011-04-22T13:33:48Z",
            "closed_at": null,
            "assignee": null,
            "assignees": [],
            "author_association": "OWNER",
            "comments": 0
        }))
        .unwrap();
        assert_eq!(issue.number, 1347);
        assert_eq!(
            issue.urls.html_url,
            "https://github.com/octocat/Hello-World/issues/1347"
        );
        assert_eq!(issue.author_association, AuthorAssociation::Owner);
        assert!(issue.state_reason.is_none());
        assert!(issue.pull_request.is_none());
    }
}
