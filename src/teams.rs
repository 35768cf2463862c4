use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::orgs::{MembershipState, OrganizationSimple};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TeamPrivacy {
    /// Only visible to organization owners and team members.
    Secret,
    /// Visible to all members of the organization.
    Closed,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    Member,
    Maintainer,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Team {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub members_url: String,
    pub repositories_url: String,
    pub name: String,
    /// The slugified version of the name.
    pub slug: String,
    pub description: Option<String>,
    pub privacy: Option<TeamPrivacy>,
    /// Closest-permission summary; the precise grants live on the
    /// team-repository edge.
    pub permission: String,
    pub parent: Option<Box<Team>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamFull {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub members_url: String,
    pub repositories_url: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub privacy: Option<TeamPrivacy>,
    pub permission: String,
    pub parent: Option<Box<Team>>,
    pub members_count: usize,
    pub repos_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub organization: OrganizationSimple,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldap_dn: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TeamCreate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Logins of organization members to add as maintainers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<String>,
    /// Full names (`org/repo`) of repositories to add the team to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repo_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<TeamPrivacy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_team_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamMembership {
    pub url: String,
    pub role: TeamRole,
    /// `pending` until the invited user accepts.
    pub state: MembershipState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_parent_team() {
        let t: Team = serde_json::from_value(json!({
            "id": 2,
            "node_id": "MDQ6VGVhbTI=",
            "url": "https://api.github.com/teams/2",
            "html_url": "https://github.com/orgs/github/teams/justice-league/child",
            "members_url": "https://api.github.com/teams/2/members{/member}",
            "repositories_url": "https://api.github.com/teams/2/repos",
            "name": "Child team",
            "slug": "child-team",
            "description": null,
            "privacy": "closed",
            "permission": "push",
            "parent": {
                "id": 1,
                "node_id": "MDQ6VGVhbTE=",
                "url": "https://api.github.com/teams/1",
                "html_url": "https://github.com/orgs/github/teams/justice-league",
                "members_url": "https://api.github.com/teams/1/members{/member}",
                "repositories_url": "https://api.github.com/teams/1/repos",
                "name": "Justice League",
                "slug": "justice-league",
                "description": "A great team.",
                "privacy": "closed",
                "permission": "admin",
                "parent": null
            }
        }))
        .unwrap();
        assert_eq!(t.parent.as_ref().unwrap().slug, "justice-league");
        assert_eq!(t.privacy, Some(TeamPrivacy::Closed));
    }
}
