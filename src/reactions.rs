use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::users::SimpleUser;

/// The reaction emoji, under GitHub's wire names (`+1`, `-1`,
/// `hooray`…).
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReactionContent {
    #[serde(rename = "+1")]
    PlusOne,
    #[serde(rename = "-1")]
    MinusOne,
    #[serde(rename = "laugh")]
    Laugh,
    #[serde(rename = "confused")]
    Confused,
    #[serde(rename = "heart")]
    Heart,
    #[serde(rename = "hooray")]
    Hooray,
    #[serde(rename = "rocket")]
    Rocket,
    #[serde(rename = "eyes")]
    Eyes,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Reaction {
    pub id: i64,
    pub node_id: String,
    pub user: Option<SimpleUser>,
    pub content: ReactionContent,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateReaction {
    pub content: ReactionContent,
}

/// The per-emoji counters embedded on issues, comments and reviews.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ReactionRollup {
    pub url: String,
    pub total_count: usize,
    #[serde(rename = "+1")]
    pub plus_one: usize,
    #[serde(rename = "-1")]
    pub minus_one: usize,
    pub laugh: usize,
    pub confused: usize,
    pub heart: usize,
    pub hooray: usize,
    pub rocket: usize,
    pub eyes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn content_wire_names() {
        assert_eq!(
            serde_json::to_value(ReactionContent::PlusOne).unwrap(),
            json!("+1")
        );
        let c: ReactionContent = serde_json::from_value(json!("hooray")).unwrap();
        assert_eq!(c, ReactionContent::Hooray);
    }

    #[test]
    fn rollup_signed_keys() {
        let r: ReactionRollup = serde_json::from_value(json!({
            "url": "https://api.github.com/repos/octocat/Hello-World/issues/1347/reactions",
            "total_count": 5,
            "+1": 3,
            "-1": 1,
            "laugh": 0,
            "confused": 0,
            "heart": 1,
            "hooray": 0,
            "rocket": 0,
            "eyes": 0
        }))
        .unwrap();
        assert_eq!(r.plus_one, 3);
        assert_eq!(r.minus_one, 1);
    }
}
