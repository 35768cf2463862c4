use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::git::Authorship;
use crate::users::SimpleUser;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
    /// GHE / internal-to-enterprise repositories.
    Internal,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Permissions {
    pub admin: bool,
    pub push: bool,
    pub pull: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintain: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triage: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LicenseSimple {
    pub key: String,
    pub name: String,
    pub spdx_id: Option<String>,
    pub url: Option<String>,
    pub node_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Repository {
    /// Unique identifier of the repository
    pub id: i64,
    pub node_id: String,
    /// The name of the repository.
    pub name: String,
    pub full_name: String,
    pub license: Option<LicenseSimple>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<SimpleUser>,
    pub forks: usize,
    pub owner: SimpleUser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
    /// Whether the repository is private or public.
    pub private: bool,
    pub html_url: String,
    pub description: Option<String>,
    pub fork: bool,
    // only on the full representation of forked repositories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Repository>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Box<Repository>>,
    pub url: String,
    pub archive_url: String,
    pub assignees_url: String,
    pub blobs_url: String,
    pub branches_url: String,
    pub collaborators_url: String,
    pub comments_url: String,
    pub commits_url: String,
    pub compare_url: String,
    pub contents_url: String,
    pub contributors_url: String,
    pub deployments_url: String,
    pub downloads_url: String,
    pub events_url: String,
    pub forks_url: String,
    pub git_commits_url: String,
    pub git_refs_url: String,
    pub git_tags_url: String,
    pub git_url: String,
    pub issue_comment_url: String,
    pub issue_events_url: String,
    pub issues_url: String,
    pub keys_url: String,
    pub labels_url: String,
    pub languages_url: String,
    pub merges_url: String,
    pub milestones_url: String,
    pub notifications_url: String,
    pub pulls_url: String,
    pub releases_url: String,
    pub ssh_url: String,
    pub stargazers_url: String,
    pub statuses_url: String,
    pub subscribers_url: String,
    pub subscription_url: String,
    pub tags_url: String,
    pub teams_url: String,
    pub trees_url: String,
    pub clone_url: String,
    pub mirror_url: Option<String>,
    pub hooks_url: String,
    pub svn_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub forks_count: usize,
    pub stargazers_count: usize,
    pub watchers_count: usize,
    /// The size of the repository, in kilobytes.
    pub size: usize,
    /// The default branch of the repository.
    pub default_branch: String,
    pub open_issues_count: usize,
    /// Whether this repository acts as a template that can be used to generate new repositories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_template: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    /// Whether issues are enabled.
    pub has_issues: bool,
    /// Whether projects are enabled.
    pub has_projects: bool,
    /// Whether the wiki is enabled.
    pub has_wiki: bool,
    pub has_pages: bool,
    /// Whether downloads are enabled.
    pub has_downloads: bool,
    /// Whether the repository is archived.
    pub archived: bool,
    /// Returns whether or not this repository disabled.
    pub disabled: bool,
    /// The repository visibility: public, private, or internal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_clone_token: Option<String>,
    /// Whether to allow squash merges for pull requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_squash_merge: Option<bool>,
    /// Whether to allow Auto-merge to be used on pull requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_auto_merge: Option<bool>,
    /// Whether to delete head branches when pull requests are merged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_branch_on_merge: Option<bool>,
    /// Whether to allow merge commits for pull requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_merge_commit: Option<bool>,
    /// Whether to allow rebase merges for pull requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_rebase_merge: Option<bool>,
    /// Whether to allow forking this repo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_forking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribers_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_count: Option<usize>,
    pub open_issues: usize,
    pub watchers: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_branch: Option<String>,
}

/// The cut-down repository embedded in list responses, webhooks, and
/// cross-references. Counters and settings only show up on some of
/// those, hence the blanket optionality.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MinimalRepository {
    pub id: i64,
    pub node_id: String,
    pub name: String,
    pub full_name: String,
    pub owner: SimpleUser,
    pub private: bool,
    pub html_url: String,
    pub description: Option<String>,
    pub fork: bool,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forks_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stargazers_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchers_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_issues_count: Option<usize>,
    #[serde(
        default,
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub pushed_at: Option<Option<DateTime<Utc>>>,
    #[serde(
        default,
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Option<DateTime<Utc>>>,
    #[serde(
        default,
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateRepositoryRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// Whether to create an initial commit with an empty README.
    #[serde(default)]
    pub auto_init: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitignore_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_template: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct UpdateRepository {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub homepage: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_squash_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_merge_commit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_rebase_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_auto_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_branch_on_merge: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct CreateFork {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub default_branch_only: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShortBranch {
    pub name: String,
    pub commit: CommitLink,
    pub protected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BranchWithProtection {
    pub name: String,
    pub commit: Commit,
    pub protected: bool,
    pub protection_url: String,
    #[serde(rename = "_links")]
    pub links: BranchLinks,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BranchLinks {
    pub html: String,
    #[serde(rename = "self")]
    pub self_: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CommitLink {
    pub sha: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TreeLink {
    pub sha: String,
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Verification {
    pub verified: bool,
    pub reason: String,
    pub signature: Option<String>,
    pub payload: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CommitDetail {
    pub url: String,
    pub author: Option<Authorship>,
    pub committer: Option<Authorship>,
    pub message: String,
    pub tree: TreeLink,
    pub comment_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Commit {
    pub url: String,
    pub sha: String,
    pub node_id: String,
    pub html_url: String,
    pub comments_url: String,
    pub commit: CommitDetail,
    // null for commits whose author/committer email matches no account
    pub author: Option<SimpleUser>,
    pub committer: Option<SimpleUser>,
    pub parents: Vec<CommitLink>,
    /// Only on the single-commit endpoint, not on listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<CommitStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<DiffEntry>>,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct CommitStats {
    pub additions: usize,
    pub deletions: usize,
    pub total: usize,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Added,
    Removed,
    Modified,
    Renamed,
    Copied,
    Changed,
    Unchanged,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DiffEntry {
    pub sha: String,
    pub filename: String,
    pub status: FileStatus,
    pub additions: usize,
    pub deletions: usize,
    pub changes: usize,
    pub blob_url: String,
    pub raw_url: String,
    pub contents_url: String,
    /// Missing for binary files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_filename: Option<String>,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    File,
    Dir,
    Symlink,
    Submodule,
}

/// One entry of a contents response; `GET /repos/{owner}/{repo}/contents/…`
/// on a directory returns a list of these, on a file a single one with
/// `content`/`encoding` populated.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Content {
    pub r#type: ContentType,
    pub name: String,
    pub path: String,
    pub sha: String,
    pub size: usize,
    pub url: Option<String>,
    pub html_url: Option<String>,
    pub git_url: Option<String>,
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// `base64` when `content` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

/// Contents of a path: a listing for directories, a single entry
/// (with `content`) for files.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum ContentListing {
    Dir(Vec<Content>),
    File(Box<Content>),
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Release {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub assets_url: String,
    pub upload_url: String,
    pub tarball_url: Option<String>,
    pub zipball_url: Option<String>,
    /// The name of the tag.
    pub tag_name: String,
    /// Specifies the commitish value that determines where the Git
    /// tag is created from.
    pub target_commitish: String,
    pub name: Option<String>,
    pub body: Option<String>,
    /// true to create a draft (unpublished) release, false to create
    /// a published one.
    pub draft: bool,
    /// Whether to identify the release as a prerelease or a full release.
    pub prerelease: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub author: SimpleUser,
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReleaseAsset {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub browser_download_url: String,
    /// The file name of the asset.
    pub name: String,
    pub label: Option<String>,
    /// `uploaded` or `open`.
    pub state: String,
    pub content_type: String,
    pub size: usize,
    pub download_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub uploader: Option<SimpleUser>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateRelease {
    pub tag_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    /// Whether to auto-generate the name and body from the commits.
    #[serde(default)]
    pub generate_release_notes: bool,
}

fn default_hook_name() -> String {
    String::from("web")
}
fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateHook {
    /// Use `web` to create a webhook. This parameter
    /// only accepts the value `web`.
    #[serde(default = "default_hook_name")]
    pub name: String,
    pub config: CreateHookConfig,
    /// Determines what events the hook is triggered for.
    #[serde(default = "HookEvent::default_set")]
    pub events: Vec<HookEvent>,
    /// Determines if notifications are sent when the webhook is
    /// triggered. Set to `true` to send notifications.
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Copy, Clone)]
#[serde(rename_all = "snake_case")]
pub enum HookEvent {
    Push,
    PullRequest,
    IssueComment,
    Issues,
    Status,
    PullRequestReview,
    Release,
    CheckRun,
    CheckSuite,
    WorkflowRun,
}

impl HookEvent {
    fn default_set() -> Vec<Self> {
        vec![Self::Push]
    }
    pub fn as_str(&self) -> &'static str {
        match self {
            HookEvent::Push => "push",
            HookEvent::PullRequest => "pull_request",
            HookEvent::IssueComment => "issue_comment",
            HookEvent::Issues => "issues",
            HookEvent::Status => "status",
            HookEvent::PullRequestReview => "pull_request_review",
            HookEvent::Release => "release",
            HookEvent::CheckRun => "check_run",
            HookEvent::CheckSuite => "check_suite",
            HookEvent::WorkflowRun => "workflow_run",
        }
    }
}

impl std::str::FromStr for HookEvent {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "push" => Ok(HookEvent::Push),
            "pull_request" => Ok(HookEvent::PullRequest),
            "issue_comment" => Ok(HookEvent::IssueComment),
            "issues" => Ok(HookEvent::Issues),
            "status" => Ok(HookEvent::Status),
            "pull_request_review" => Ok(HookEvent::PullRequestReview),
            "release" => Ok(HookEvent::Release),
            "check_run" => Ok(HookEvent::CheckRun),
            "check_suite" => Ok(HookEvent::CheckSuite),
            "workflow_run" => Ok(HookEvent::WorkflowRun),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateHookConfig {
    /// URL to which the payloads will be delivered
    pub url: String,
    /// The default media type used to serialize the payloads,
    /// supported values include json and form.
    #[serde(default)]
    pub content_type: HookContentType,
    #[serde(default)]
    pub secret: String,
    /// Determines whether the SSL certificate of the host `url` will
    /// be verified when delivering payloads, can be configured using
    /// a number (0 or 1) or a string ('0' or '1')
    #[serde(default = "default_true", deserialize_with = "boolish")]
    pub insecure_ssl: bool,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HookContentType {
    /// JSON payload set as the `payload` key of an
    /// application/x-www-form-urlencoded
    Form,
    /// JSON payload as-is
    Json,
}
impl Default for HookContentType {
    fn default() -> Self {
        Self::Form
    }
}
impl HookContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookContentType::Form => "form",
            HookContentType::Json => "json",
        }
    }
}

/// Deserialize insecure_ssl which is semantically a boolean flag but
/// can be set via an integer or a string
fn boolish<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    use serde_json::value::Value;
    match Value::deserialize(d) {
        Ok(Value::Bool(b)) => Ok(b),
        Ok(Value::Number(n)) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(()),
        },
        Ok(Value::String(s)) if s == "0" => Ok(false),
        Ok(Value::String(s)) if s == "1" => Ok(true),
        _ => Err(()),
    }
    .map_err(|_| {
        serde::de::Error::custom("Failed to deserialize boolean-ish (0 or 1)")
    })
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Hook {
    /// `Repository`
    pub r#type: String,
    pub id: i64,
    /// `web`
    pub name: String,
    pub active: bool,
    pub events: Vec<HookEvent>,
    pub config: CreateHookConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub url: String,
    pub test_url: String,
    pub ping_url: String,
    pub deliveries_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_response: Option<HookLastResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HookLastResponse {
    pub code: Option<u16>,
    pub status: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hook_config_boolish_forms() {
        for v in [json!("1"), json!(1), json!(true)] {
            let c: CreateHookConfig = serde_json::from_value(json!({
                "url": "https://example.com/hook",
                "insecure_ssl": v
            }))
            .unwrap();
            assert!(c.insecure_ssl, "insecure_ssl should accept {v}");
        }
        let c: CreateHookConfig = serde_json::from_value(json!({
            "url": "https://example.com/hook",
            "insecure_ssl": "0"
        }))
        .unwrap();
        assert!(!c.insecure_ssl);
        assert_eq!(c.content_type.as_str(), "form");

        assert!(serde_json::from_value::<CreateHookConfig>(json!({
            "url": "https://example.com/hook",
            "insecure_ssl": "yes"
        }))
        .is_err());
    }

    #[test]
    fn create_hook_defaults() {
        let h: CreateHook = serde_json::from_value(json!({
            "config": { "url": "https://example.com/hook" }
        }))
        .unwrap();
        assert_eq!(h.name, "web");
        assert!(h.active);
        assert_eq!(h.events, vec![HookEvent::Push]);
    }

    #[test]
    fn minimal_repository_listing_shape() {
        let r: MinimalRepository = serde_json::from_value(json!({
            "id": 1296269,
            "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "owner": {
                "login": "octocat",
                "id": 1,
                "node_id": "MDQ6VXNlcjE=",
                "avatar_url": "https://github.com/images/error/octocat_happy.gif",
                "gravatar_id": "",
                "url": "https://api.github.com/users/octocat",
                "html_url": "https://github.com/octocat",
                "followers_url": "https://api.github.com/users/octocat/followers",
                "following_url": "https://api.github.com/users/octocat/following{/other_user}",
                "gists_url": "https://api.github.com/users/octocat/gists{/gist_id}",
                "starred_url": "https://api.github.com/users/octocat/starred{/owner}{/repo}",
                "subscriptions_url": "https://api.github.com/users/octocat/subscriptions",
                "organizations_url": "https://api.github.com/users/octocat/orgs",
                "repos_url": "https://api.github.com/users/octocat/repos",
                "events_url": "https://api.github.com/users/octocat/events{/privacy}",
                "received_events_url": "https://api.github.com/users/octocat/received_events",
                "type": "User",
                "site_admin": false
            },
            "private": false,
            "html_url": "https://github.com/octocat/Hello-World",
            "description": null,
            "fork": false,
            "url": "https://api.github.com/repos/octocat/Hello-World",
            "language": null,
            "pushed_at": "2011-01-26T19:06:43Z"
        }))
        .unwrap();
        assert!(r.description.is_none());
        // present-but-null vs absent
        assert_eq!(r.language, Some(None));
        assert!(r.default_branch.is_none());
        assert!(r.pushed_at.unwrap().is_some());
    }

    #[test]
    fn update_repository_description_tristate() {
        let u: UpdateRepository =
            serde_json::from_value(json!({ "description": null })).unwrap();
        assert_eq!(u.description, Some(None));
        assert!(u.homepage.is_none());
        let v = serde_json::to_value(&u).unwrap();
        assert!(v.get("description").unwrap().is_null());
        assert!(v.get("homepage").is_none());
    }
}
