use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::users::{Plan, SimpleUser, UserType};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrganizationSimple {
    pub login: String,
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub repos_url: String,
    pub events_url: String,
    pub hooks_url: String,
    pub issues_url: String,
    pub members_url: String,
    pub public_members_url: String,
    pub avatar_url: String,
    pub description: Option<String>,
}

// not actually full, there's a bunch of fields which are only for
// logged users with enough rights but that's not really reflected in
// the schema (except in that they're not required)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrganizationFull {
    pub id: i64,
    pub node_id: String,
    pub login: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub blog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    pub r#type: UserType,
    pub is_verified: bool,
    pub has_organization_projects: bool,
    pub has_repository_projects: bool,
    pub public_repos: usize,
    pub public_gists: usize,
    pub followers: usize,
    pub following: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub url: String,
    pub html_url: String,
    pub avatar_url: String,
    pub repos_url: String,
    pub events_url: String,
    pub hooks_url: String,
    pub issues_url: String,
    pub members_url: String,
    pub public_members_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_private_repos: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_private_repos: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_gists: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_usage: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaborators: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_repository_permission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_can_create_repositories: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_factor_requirement_enabled: Option<bool>,
}

#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct OrgUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_organization_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_repository_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_repository_permission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_can_create_repositories: Option<bool>,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MembershipRole {
    Admin,
    Member,
    BillingManager,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MembershipState {
    Active,
    Pending,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrgMembership {
    pub url: String,
    pub state: MembershipState,
    pub role: MembershipRole,
    pub organization_url: String,
    pub organization: OrganizationSimple,
    pub user: Option<SimpleUser>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn membership_wire_names() {
        let m: OrgMembership = serde_json::from_value(json!({
            "url": "https://api.github.com/orgs/octocat-org/memberships/defunkt",
            "state": "pending",
            "role": "billing_manager",
            "organization_url": "https://api.github.com/orgs/octocat-org",
            "organization": {
                "login": "octocat-org",
                "id": 1,
                "node_id": "MDEyOk9yZ2FuaXphdGlvbjE=",
                "url": "https://api.github.com/orgs/octocat-org",
                "repos_url": "https://api.github.com/orgs/octocat-org/repos",
                "events_url": "https://api.github.com/orgs/octocat-org/events",
                "hooks_url": "https://api.github.com/orgs/octocat-org/hooks",
                "issues_url": "https://api.github.com/orgs/octocat-org/issues",
                "members_url": "https://api.github.com/orgs/octocat-org/members{/member}",
                "public_members_url": "https://api.github.com/orgs/octocat-org/public_members{/member}",
                "avatar_url": "https://github.com/images/error/octocat_happy.gif",
                "description": null
            },
            "user": null
        }))
        .unwrap();
        assert_eq!(m.state, MembershipState::Pending);
        assert_eq!(m.role, MembershipRole::BillingManager);
        assert!(m.user.is_none());
    }
}
