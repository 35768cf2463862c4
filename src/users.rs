use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserType {
    User,
    Organization,
    Bot,
    // TODO: Enterprise?
}
impl Default for UserType {
    fn default() -> Self {
        Self::User
    }
}
impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Organization => "Organization",
            Self::Bot => "Bot",
        }
    }
}

// name and email are both nullable: true and !required...
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct SimpleUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub login: String,
    pub id: i64,
    pub node_id: String,
    pub avatar_url: String,
    pub gravatar_id: Option<String>,
    pub url: String,
    pub html_url: String,
    pub followers_url: String,
    pub following_url: String,
    pub gists_url: String,
    pub starred_url: String,
    pub subscriptions_url: String,
    pub organizations_url: String,
    pub repos_url: String,
    pub events_url: String,
    pub received_events_url: String,
    pub r#type: UserType,
    pub site_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PublicUser {
    pub login: String,
    pub id: i64,
    pub node_id: String,
    pub avatar_url: String,
    pub gravatar_id: Option<String>,
    pub url: String,
    pub html_url: String,
    pub followers_url: String,
    pub following_url: String,
    pub gists_url: String,
    pub starred_url: String,
    pub subscriptions_url: String,
    pub organizations_url: String,
    pub repos_url: String,
    pub events_url: String,
    pub received_events_url: String,
    pub r#type: UserType,
    pub site_admin: bool,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    pub public_repos: usize,
    pub public_gists: usize,
    pub followers: usize,
    pub following: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The authenticated user's own view, public fields plus the private
/// counters and plan.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PrivateUser {
    #[serde(flatten)]
    pub user: PublicUser,
    pub private_gists: usize,
    pub total_private_repos: usize,
    pub owned_private_repos: usize,
    pub disk_usage: usize,
    pub collaborators: usize,
    pub two_factor_authentication: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Plan {
    pub name: String,
    pub space: usize,
    pub private_repos: usize,
    pub collaborators: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Email {
    pub email: String,
    pub primary: bool,
    pub verified: bool,
    /// `public`, `private`, or null when unset.
    pub visibility: Option<String>,
}

/// `PATCH /user` body, every field optional.
#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub blog: Option<Option<String>>,
    #[serde(
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub twitter_username: Option<Option<String>>,
    #[serde(
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub company: Option<Option<String>>,
    #[serde(
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hireable: Option<bool>,
    #[serde(
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub bio: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn simple_user_name_email_absent() {
        let u: SimpleUser = serde_json::from_value(json!({
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
        }))
        .unwrap();
        assert_eq!(u.login, "octocat");
        assert_eq!(u.r#type, UserType::User);
        assert!(u.name.is_none());
        // absent optional fields must not serialize back
        let v = serde_json::to_value(&u).unwrap();
        assert!(v.get("name").is_none());
        assert!(v.get("starred_at").is_none());
    }

    #[test]
    fn user_update_unset_vs_null() {
        let upd: UserUpdate =
            serde_json::from_value(json!({ "bio": null, "name": "Mona" }))
                .unwrap();
        assert_eq!(upd.bio, Some(None));
        assert_eq!(upd.blog, None);
        assert_eq!(upd.name.as_deref(), Some("Mona"));

        // None fields drop out, explicit null survives
        let v = serde_json::to_value(&upd).unwrap();
        assert!(v.get("blog").is_none());
        assert!(v.get("bio").unwrap().is_null());
    }
}
