//! Per-area endpoint descriptors.
//!
//! One module per API client area; each operation is a `const`
//! [`Endpoint`](crate::Endpoint) paired with its `…Params` struct. The
//! doc comment on every const carries the `METHOD /path` identity of
//! the operation.

use serde::{Deserialize, Serialize};

pub mod actions;
pub mod checks;
pub mod git;
pub mod issues;
pub mod orgs;
pub mod pulls;
pub mod rate_limit;
pub mod reactions;
pub mod repos;
pub mod search;
pub mod teams;
pub mod users;

/// The `per_page`/`page` query pair shared by every paginated listing.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Pagination {
    /// The number of results per page (max 100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Page number of the results to fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Ascending or descending, for the listings that sort.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

/// The open/closed/all filter shared by issue-ish listings.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StateFilter {
    Open,
    Closed,
    All,
}

#[cfg(test)]
mod tests {
    use super::*;

    // every descriptor in the crate, for the cross-module checks
    fn catalog() -> Vec<(&'static str, &'static str, Option<&'static str>)> {
        macro_rules! entries {
            ($($ep:expr),* $(,)?) => {
                vec![$(($ep.id(), $ep.client_id(), $ep.version())),*]
            };
        }
        entries![
            rate_limit::GET,
            users::GET_AUTHENTICATED,
            users::GET_BY_USERNAME,
            users::LIST,
            users::UPDATE_AUTHENTICATED,
            users::LIST_EMAILS_FOR_AUTHENTICATED_USER,
            users::LIST_FOLLOWERS_FOR_USER,
            repos::GET,
            repos::CREATE_FOR_AUTHENTICATED_USER,
            repos::CREATE_IN_ORG,
            repos::UPDATE,
            repos::DELETE,
            repos::LIST_FOR_ORG,
            repos::LIST_FOR_USER,
            repos::LIST_BRANCHES,
            repos::GET_BRANCH,
            repos::LIST_COMMITS,
            repos::GET_COMMIT,
            repos::GET_CONTENT,
            repos::LIST_FORKS,
            repos::CREATE_FORK,
            repos::LIST_RELEASES,
            repos::GET_RELEASE,
            repos::CREATE_RELEASE,
            repos::LIST_WEBHOOKS,
            repos::CREATE_WEBHOOK,
            repos::PING_WEBHOOK,
            issues::LIST_FOR_REPO,
            issues::GET,
            issues::CREATE,
            issues::UPDATE,
            issues::LIST_COMMENTS,
            issues::CREATE_COMMENT,
            issues::UPDATE_COMMENT,
            issues::DELETE_COMMENT,
            issues::LIST_LABELS_FOR_REPO,
            issues::ADD_LABELS,
            issues::LIST_MILESTONES,
            pulls::LIST,
            pulls::GET,
            pulls::CREATE,
            pulls::UPDATE,
            pulls::LIST_COMMITS,
            pulls::LIST_FILES,
            pulls::CHECK_IF_MERGED,
            pulls::MERGE,
            pulls::LIST_REVIEWS,
            pulls::CREATE_REVIEW,
            pulls::LIST_REVIEW_COMMENTS,
            pulls::LIST_REQUESTED_REVIEWERS,
            git::GET_BLOB,
            git::CREATE_BLOB,
            git::GET_COMMIT,
            git::CREATE_COMMIT,
            git::GET_REF,
            git::LIST_MATCHING_REFS,
            git::CREATE_REF,
            git::UPDATE_REF,
            git::DELETE_REF,
            git::GET_TAG,
            git::CREATE_TAG,
            git::GET_TREE,
            git::CREATE_TREE,
            orgs::GET,
            orgs::LIST,
            orgs::UPDATE,
            orgs::LIST_MEMBERS,
            orgs::GET_MEMBERSHIP_FOR_USER,
            orgs::LIST_FOR_AUTHENTICATED_USER,
            teams::LIST,
            teams::GET_BY_NAME,
            teams::CREATE,
            teams::LIST_MEMBERS_IN_ORG,
            teams::GET_MEMBERSHIP_FOR_USER_IN_ORG,
            teams::LIST_REPOS_IN_ORG,
            actions::LIST_REPO_WORKFLOWS,
            actions::GET_WORKFLOW,
            actions::LIST_WORKFLOW_RUNS,
            actions::LIST_WORKFLOW_RUNS_FOR_REPO,
            actions::GET_WORKFLOW_RUN,
            actions::CANCEL_WORKFLOW_RUN,
            actions::RE_RUN_WORKFLOW,
            actions::LIST_JOBS_FOR_WORKFLOW_RUN,
            actions::GET_JOB_FOR_WORKFLOW_RUN,
            actions::LIST_ARTIFACTS_FOR_REPO,
            actions::GET_ARTIFACT,
            actions::DELETE_ARTIFACT,
            checks::CREATE,
            checks::GET,
            checks::UPDATE,
            checks::LIST_FOR_REF,
            checks::LIST_FOR_SUITE,
            checks::GET_SUITE,
            checks::LIST_SUITES_FOR_REF,
            checks::REREQUEST_SUITE,
            checks::LIST_ANNOTATIONS,
            reactions::LIST_FOR_ISSUE,
            reactions::CREATE_FOR_ISSUE,
            reactions::LIST_FOR_ISSUE_COMMENT,
            reactions::CREATE_FOR_ISSUE_COMMENT,
            reactions::DELETE_FOR_ISSUE,
            search::REPOS,
            search::ISSUES_AND_PULL_REQUESTS,
            search::CODE,
            search::USERS,
            search::LABELS,
            search::COMMITS,
        ]
    }

    #[test]
    fn ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (id, _, _) in catalog() {
            assert!(seen.insert(id), "duplicate descriptor id {id}");
        }
    }

    #[test]
    fn ids_match_their_client() {
        for (id, client, _) in catalog() {
            let (area, op) = id
                .split_once('/')
                .unwrap_or_else(|| panic!("malformed id {id}"));
            assert_eq!(area, client, "id {id} owned by client {client}");
            assert!(!op.is_empty());
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_lowercase() || "/-".contains(c)),
                "id {id} should be lowercase kebab"
            );
        }
    }

    #[test]
    fn pinned_versions_are_dates() {
        for (id, _, version) in catalog() {
            if let Some(v) = version {
                assert!(
                    chrono::NaiveDate::parse_from_str(v, "%Y-%m-%d").is_ok(),
                    "descriptor {id} pins malformed version {v}"
                );
            }
        }
    }

    #[test]
    fn pagination_serializes_sparsely() {
        let p = Pagination {
            per_page: Some(100),
            page: None,
        };
        let v = serde_json::to_value(p).unwrap();
        assert_eq!(v, serde_json::json!({ "per_page": 100 }));
    }
}
