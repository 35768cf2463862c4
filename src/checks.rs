use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actions::{RunConclusion, RunStatus};
use crate::repos::MinimalRepository;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CheckRun {
    /// The id of the check.
    pub id: i64,
    /// The SHA of the commit that is being checked.
    pub head_sha: String,
    pub node_id: String,
    pub external_id: Option<String>,
    pub url: String,
    pub html_url: Option<String>,
    pub details_url: Option<String>,
    pub status: RunStatus,
    pub conclusion: Option<RunConclusion>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub output: CheckOutput,
    /// The name of the check.
    pub name: String,
    pub check_suite: Option<CheckSuiteLink>,
    // the app object is large and rarely consumed, keep it loose
    pub app: Option<serde_json::Value>,
    /// Pull requests whose head matches the checked SHA.
    #[serde(default)]
    pub pull_requests: Vec<PullRequestLink>,
}

// checks embed a cut-down pull request, not the full resource
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PullRequestLink {
    pub id: i64,
    pub number: usize,
    pub url: String,
    pub head: PullRefLink,
    pub base: PullRefLink,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PullRefLink {
    pub r#ref: String,
    pub sha: String,
    pub repo: RepoLink,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RepoLink {
    pub id: i64,
    pub url: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CheckOutput {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub annotations_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations_url: Option<String>,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct CheckSuiteLink {
    pub id: i64,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationLevel {
    Notice,
    Warning,
    Failure,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CheckAnnotation {
    pub path: String,
    pub start_line: usize,
    pub end_line: usize,
    /// Only meaningful when start and end line coincide.
    pub start_column: Option<usize>,
    pub end_column: Option<usize>,
    pub annotation_level: Option<AnnotationLevel>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub raw_details: Option<String>,
    pub blob_href: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CheckSuite {
    pub id: i64,
    pub node_id: String,
    pub head_branch: Option<String>,
    /// The SHA of the head commit that is being checked.
    pub head_sha: String,
    pub status: Option<RunStatus>,
    pub conclusion: Option<RunConclusion>,
    pub url: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
    #[serde(default)]
    pub pull_requests: Vec<PullRequestLink>,
    pub app: Option<serde_json::Value>,
    pub repository: MinimalRepository,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_check_runs_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_runs_url: Option<String>,
}

/// `POST /repos/{owner}/{repo}/check-runs` body. The status/conclusion
/// interplay is enforced server-side: a `completed` status requires a
/// conclusion.
#[derive(Serialize, Deserialize, Debug)]
pub struct CreateCheckRun {
    pub name: String,
    pub head_sha: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<RunConclusion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<CreateCheckOutput>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateCheckOutput {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<CreateCheckAnnotation>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateCheckAnnotation {
    pub path: String,
    pub start_line: usize,
    pub end_line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_column: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column: Option<usize>,
    pub annotation_level: AnnotationLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_details: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct UpdateCheckRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<RunConclusion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<CreateCheckOutput>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CheckRunList {
    pub total_count: usize,
    pub check_runs: Vec<CheckRun>,
}
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CheckSuiteList {
    pub total_count: usize,
    pub check_suites: Vec<CheckSuite>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_check_run_minimal_body() {
        let c = CreateCheckRun {
            name: "mighty_readme".into(),
            head_sha: "ce587453ced02b1526dfb4cb910479d431683101".into(),
            details_url: None,
            external_id: None,
            status: None,
            started_at: None,
            conclusion: None,
            completed_at: None,
            output: None,
        };
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(
            v,
            json!({
                "name": "mighty_readme",
                "head_sha": "ce587453ced02b1526dfb4cb910479d431683101"
            })
        );
    }

    #[test]
    fn annotation_level_names() {
        let l: AnnotationLevel = serde_json::from_value(json!("warning")).unwrap();
        assert_eq!(l, AnnotationLevel::Warning);
    }
}
