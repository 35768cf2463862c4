#![doc = include_str!("../README.md")]

pub mod actions;
pub mod checks;
pub mod endpoint;
pub mod endpoints;
pub mod git;
pub mod issues;
pub mod orgs;
pub mod pulls;
pub mod reactions;
pub mod repos;
pub mod search;
pub mod teams;
pub mod users;
mod utils;

pub use endpoint::{Endpoint, PaginationHeaders, RateLimitHeaders};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RateLimitOverview {
    pub resources: RateLimitResources,
    /// Duplicate of `resources.core`, kept by GitHub for compatibility.
    pub rate: RateLimitUsage,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RateLimitResources {
    pub core: RateLimitUsage,
    pub search: RateLimitUsage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql: Option<RateLimitUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_manifest: Option<RateLimitUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_scanning_upload: Option<RateLimitUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions_runner_registration: Option<RateLimitUsage>,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct RateLimitUsage {
    pub limit: u64,
    pub remaining: u64,
    /// Unix epoch seconds at which the window resets.
    pub reset: i64,
    pub used: u64,
}
