use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::MinimalRepository;
use crate::users::SimpleUser;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    Active,
    Deleted,
    DisabledFork,
    DisabledInactivity,
    DisabledManually,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Workflow {
    pub id: i64,
    pub node_id: String,
    pub name: String,
    /// Repository-relative path of the workflow file.
    pub path: String,
    pub state: WorkflowState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub url: String,
    pub html_url: String,
    pub badge_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    Waiting,
    Requested,
    Pending,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunConclusion {
    Success,
    Failure,
    Neutral,
    Cancelled,
    Skipped,
    TimedOut,
    ActionRequired,
    Stale,
    StartupFailure,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorkflowRun {
    /// The ID of the workflow run.
    pub id: i64,
    pub node_id: String,
    /// The name of the workflow run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub head_branch: Option<String>,
    /// The SHA of the head commit that points to the version of the
    /// workflow being run.
    pub head_sha: String,
    /// The auto incrementing run number for the workflow run.
    pub run_number: usize,
    /// Attempt number, starts at 1 and goes up on re-runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_attempt: Option<usize>,
    pub event: String,
    pub status: Option<RunStatus>,
    pub conclusion: Option<RunConclusion>,
    pub workflow_id: i64,
    pub url: String,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_started_at: Option<DateTime<Utc>>,
    pub jobs_url: String,
    pub logs_url: String,
    pub check_suite_url: String,
    pub artifacts_url: String,
    pub cancel_url: String,
    pub rerun_url: String,
    pub workflow_url: String,
    pub repository: MinimalRepository,
    pub head_repository: Option<MinimalRepository>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<SimpleUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggering_actor: Option<SimpleUser>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JobStep {
    pub name: String,
    pub status: RunStatus,
    pub conclusion: Option<RunConclusion>,
    pub number: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Job {
    /// The ID of the job.
    pub id: i64,
    /// The ID of the associated workflow run.
    pub run_id: i64,
    pub run_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_attempt: Option<usize>,
    pub node_id: String,
    pub head_sha: String,
    pub url: String,
    pub html_url: Option<String>,
    pub status: RunStatus,
    pub conclusion: Option<RunConclusion>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub name: String,
    #[serde(default)]
    pub steps: Vec<JobStep>,
    pub check_run_url: String,
    /// Labels the job asked for, e.g. `ubuntu-latest`.
    #[serde(default)]
    pub labels: Vec<String>,
    pub runner_id: Option<i64>,
    pub runner_name: Option<String>,
    pub runner_group_id: Option<i64>,
    pub runner_group_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Artifact {
    pub id: i64,
    pub node_id: String,
    /// The name of the artifact.
    pub name: String,
    /// The size in bytes of the artifact.
    pub size_in_bytes: usize,
    pub url: String,
    pub archive_download_url: String,
    /// Whether or not the artifact has expired.
    pub expired: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_run: Option<ArtifactWorkflowRun>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ArtifactWorkflowRun {
    pub id: i64,
    pub repository_id: i64,
    pub head_repository_id: i64,
    pub head_branch: String,
    pub head_sha: String,
}

// Actions listings wrap their items in a `total_count` envelope
// instead of returning a bare array.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorkflowList {
    pub total_count: usize,
    pub workflows: Vec<Workflow>,
}
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorkflowRunList {
    pub total_count: usize,
    pub workflow_runs: Vec<WorkflowRun>,
}
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JobList {
    pub total_count: usize,
    pub jobs: Vec<Job>,
}
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ArtifactList {
    pub total_count: usize,
    pub artifacts: Vec<Artifact>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn run_status_wire_names() {
        let s: RunStatus = serde_json::from_value(json!("in_progress")).unwrap();
        assert_eq!(s, RunStatus::InProgress);
        let c: RunConclusion = serde_json::from_value(json!("timed_out")).unwrap();
        assert_eq!(c, RunConclusion::TimedOut);
    }

    #[test]
    fn artifact_expiry_nullables() {
        let a: Artifact = serde_json::from_value(json!({
            "id": 11,
            "node_id": "MDg6QXJ0aWZhY3QxMQ==",
            "name": "Rails",
            "size_in_bytes": 556,
            "url": "https://api.github.com/repos/octo-org/octo-docs/actions/artifacts/11",
            "archive_download_url": "https://api.github.com/repos/octo-org/octo-docs/actions/artifacts/11/zip",
            "expired": true,
            "created_at": "2020-01-10T14:59:22Z",
            "expires_at": null,
            "updated_at": "2020-01-21T14:59:22Z"
        }))
        .unwrap();
        assert!(a.expired);
        assert!(a.expires_at.is_none());
        assert!(a.workflow_run.is_none());
    }
}
