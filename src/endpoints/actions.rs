use serde::{Deserialize, Serialize};

use super::Pagination;
use crate::actions::{
    Artifact, ArtifactList, Job, JobList, Workflow, WorkflowList,
    WorkflowRun, WorkflowRunList,
};
use crate::endpoint::{Endpoint, PaginationHeaders};

/// `GET /repos/{owner}/{repo}/actions/workflows`
pub const LIST_REPO_WORKFLOWS: Endpoint<
    ListInRepoParams,
    WorkflowList,
    PaginationHeaders,
> = Endpoint::new("actions/list-repo-workflows", "actions");

/// `GET /repos/{owner}/{repo}/actions/workflows/{workflow_id}`
pub const GET_WORKFLOW: Endpoint<WorkflowParams, Workflow> =
    Endpoint::new("actions/get-workflow", "actions");

/// `GET /repos/{owner}/{repo}/actions/workflows/{workflow_id}/runs`
pub const LIST_WORKFLOW_RUNS: Endpoint<
    ListWorkflowRunsParams,
    WorkflowRunList,
    PaginationHeaders,
> = Endpoint::new("actions/list-workflow-runs", "actions");

/// `GET /repos/{owner}/{repo}/actions/runs`
pub const LIST_WORKFLOW_RUNS_FOR_REPO: Endpoint<
    ListRunsForRepoParams,
    WorkflowRunList,
    PaginationHeaders,
> = Endpoint::new("actions/list-workflow-runs-for-repo", "actions");

/// `GET /repos/{owner}/{repo}/actions/runs/{run_id}`
pub const GET_WORKFLOW_RUN: Endpoint<RunParams, WorkflowRun> =
    Endpoint::new("actions/get-workflow-run", "actions");

/// `POST /repos/{owner}/{repo}/actions/runs/{run_id}/cancel`
pub const CANCEL_WORKFLOW_RUN: Endpoint<RunParams, ()> =
    Endpoint::new("actions/cancel-workflow-run", "actions");

/// `POST /repos/{owner}/{repo}/actions/runs/{run_id}/rerun`
pub const RE_RUN_WORKFLOW: Endpoint<ReRunParams, ()> =
    Endpoint::pinned("actions/re-run-workflow", "actions", "2022-11-28");

/// `GET /repos/{owner}/{repo}/actions/runs/{run_id}/jobs`
pub const LIST_JOBS_FOR_WORKFLOW_RUN: Endpoint<
    ListJobsParams,
    JobList,
    PaginationHeaders,
> = Endpoint::new("actions/list-jobs-for-workflow-run", "actions");

/// `GET /repos/{owner}/{repo}/actions/jobs/{job_id}`
pub const GET_JOB_FOR_WORKFLOW_RUN: Endpoint<JobParams, Job> =
    Endpoint::new("actions/get-job-for-workflow-run", "actions");

/// `GET /repos/{owner}/{repo}/actions/artifacts`
pub const LIST_ARTIFACTS_FOR_REPO: Endpoint<
    ListArtifactsParams,
    ArtifactList,
    PaginationHeaders,
> = Endpoint::new("actions/list-artifacts-for-repo", "actions");

/// `GET /repos/{owner}/{repo}/actions/artifacts/{artifact_id}`
pub const GET_ARTIFACT: Endpoint<ArtifactParams, Artifact> =
    Endpoint::new("actions/get-artifact", "actions");

/// `DELETE /repos/{owner}/{repo}/actions/artifacts/{artifact_id}`
pub const DELETE_ARTIFACT: Endpoint<ArtifactParams, ()> =
    Endpoint::new("actions/delete-artifact", "actions");

/// Workflows are addressed by numeric id or by file name
/// (`main.yaml`).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum WorkflowSelector {
    Id(i64),
    FileName(String),
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListInRepoParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorkflowParams {
    pub owner: String,
    pub repo: String,
    pub workflow_id: WorkflowSelector,
}

/// The run filters shared by the repo-wide and per-workflow listings.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RunFilter {
    /// Someone's login; only runs they triggered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Triggering event, e.g. `push` or `pull_request`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// A [`RunStatus`](crate::actions::RunStatus) or
    /// [`RunConclusion`](crate::actions::RunConclusion) wire name;
    /// GitHub accepts either in this one spot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListWorkflowRunsParams {
    pub owner: String,
    pub repo: String,
    pub workflow_id: WorkflowSelector,
    #[serde(flatten)]
    pub filter: RunFilter,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListRunsForRepoParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub filter: RunFilter,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RunParams {
    pub owner: String,
    pub repo: String,
    pub run_id: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReRunParams {
    pub owner: String,
    pub repo: String,
    pub run_id: i64,
    /// Re-run with debug logging enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_debug_logging: Option<bool>,
}

/// `latest`, or `all` to include jobs from earlier attempts.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobAttemptFilter {
    Latest,
    All,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListJobsParams {
    pub owner: String,
    pub repo: String,
    pub run_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<JobAttemptFilter>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JobParams {
    pub owner: String,
    pub repo: String,
    pub job_id: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListArtifactsParams {
    pub owner: String,
    pub repo: String,
    /// Exact artifact name to filter on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ArtifactParams {
    pub owner: String,
    pub repo: String,
    pub artifact_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn workflow_selector_forms() {
        let p: WorkflowParams = serde_json::from_value(json!({
            "owner": "octo-org",
            "repo": "octo-repo",
            "workflow_id": 161335
        }))
        .unwrap();
        assert!(matches!(p.workflow_id, WorkflowSelector::Id(161335)));

        let p: WorkflowParams = serde_json::from_value(json!({
            "owner": "octo-org",
            "repo": "octo-repo",
            "workflow_id": "main.yaml"
        }))
        .unwrap();
        assert!(matches!(p.workflow_id, WorkflowSelector::FileName(_)));
    }

    #[test]
    fn re_run_is_version_pinned() {
        assert_eq!(RE_RUN_WORKFLOW.version(), Some("2022-11-28"));
        assert_eq!(GET_WORKFLOW.version(), None);
    }
}
