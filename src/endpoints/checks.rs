use serde::{Deserialize, Serialize};

use super::Pagination;
use crate::checks::{
    CheckAnnotation, CheckRun, CheckRunList, CheckSuite, CheckSuiteList,
    CreateCheckRun, UpdateCheckRun,
};
use crate::endpoint::{Endpoint, PaginationHeaders};

/// `POST /repos/{owner}/{repo}/check-runs`
pub const CREATE: Endpoint<CreateParams, CheckRun> =
    Endpoint::pinned("checks/create", "checks", "2022-11-28");

/// `GET /repos/{owner}/{repo}/check-runs/{check_run_id}`
pub const GET: Endpoint<CheckRunParams, CheckRun> =
    Endpoint::new("checks/get", "checks");

/// `PATCH /repos/{owner}/{repo}/check-runs/{check_run_id}`
pub const UPDATE: Endpoint<UpdateParams, CheckRun> =
    Endpoint::pinned("checks/update", "checks", "2022-11-28");

/// `GET /repos/{owner}/{repo}/commits/{ref}/check-runs`
pub const LIST_FOR_REF: Endpoint<
    ListForRefParams,
    CheckRunList,
    PaginationHeaders,
> = Endpoint::new("checks/list-for-ref", "checks");

/// `GET /repos/{owner}/{repo}/check-suites/{check_suite_id}/check-runs`
pub const LIST_FOR_SUITE: Endpoint<
    ListForSuiteParams,
    CheckRunList,
    PaginationHeaders,
> = Endpoint::new("checks/list-for-suite", "checks");

/// `GET /repos/{owner}/{repo}/check-suites/{check_suite_id}`
pub const GET_SUITE: Endpoint<CheckSuiteParams, CheckSuite> =
    Endpoint::new("checks/get-suite", "checks");

/// `GET /repos/{owner}/{repo}/commits/{ref}/check-suites`
pub const LIST_SUITES_FOR_REF: Endpoint<
    ListSuitesParams,
    CheckSuiteList,
    PaginationHeaders,
> = Endpoint::new("checks/list-suites-for-ref", "checks");

/// `POST /repos/{owner}/{repo}/check-suites/{check_suite_id}/rerequest`
pub const REREQUEST_SUITE: Endpoint<CheckSuiteParams, ()> =
    Endpoint::new("checks/rerequest-suite", "checks");

/// `GET /repos/{owner}/{repo}/check-runs/{check_run_id}/annotations`
pub const LIST_ANNOTATIONS: Endpoint<
    ListAnnotationsParams,
    Vec<CheckAnnotation>,
    PaginationHeaders,
> = Endpoint::new("checks/list-annotations", "checks");

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub body: CreateCheckRun,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CheckRunParams {
    pub owner: String,
    pub repo: String,
    pub check_run_id: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateParams {
    pub owner: String,
    pub repo: String,
    pub check_run_id: i64,
    #[serde(flatten)]
    pub body: UpdateCheckRun,
}

/// `latest` returns only the most recent run per check name.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckRunFilter {
    Latest,
    All,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListForRefParams {
    pub owner: String,
    pub repo: String,
    pub r#ref: String,
    /// Only check runs with this name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_name: Option<String>,
    /// `queued`, `in_progress` or `completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<CheckRunFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<i64>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListForSuiteParams {
    pub owner: String,
    pub repo: String,
    pub check_suite_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<CheckRunFilter>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CheckSuiteParams {
    pub owner: String,
    pub repo: String,
    pub check_suite_id: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListSuitesParams {
    pub owner: String,
    pub repo: String,
    pub r#ref: String,
    /// Only suites created by this GitHub App.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_name: Option<String>,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListAnnotationsParams {
    pub owner: String,
    pub repo: String,
    pub check_run_id: i64,
    #[serde(flatten)]
    pub page: Pagination,
}
