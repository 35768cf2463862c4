use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::issues::{Issue, Label};
use crate::repos::{MinimalRepository, Repository};
use crate::users::SimpleUser;

/// Envelope common to every search endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SearchResults<T> {
    pub total_count: usize,
    /// Set when the query timed out before scanning everything.
    pub incomplete_results: bool,
    pub items: Vec<T>,
}

/// Populated when the request asks for the `text-match` media type.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TextMatch {
    pub object_url: String,
    pub object_type: Option<String>,
    pub property: String,
    pub fragment: String,
    pub matches: Vec<MatchedTerm>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct MatchedTerm {
    pub text: String,
    pub indices: Vec<usize>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CodeSearchItem {
    pub name: String,
    pub path: String,
    pub sha: String,
    pub url: String,
    pub git_url: String,
    pub html_url: String,
    pub repository: MinimalRepository,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_matches: Vec<TextMatch>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RepoSearchItem {
    #[serde(flatten)]
    pub repo: Repository,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_matches: Vec<TextMatch>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct IssueSearchItem {
    #[serde(flatten)]
    pub issue: Issue,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_matches: Vec<TextMatch>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserSearchItem {
    #[serde(flatten)]
    pub user: SimpleUser,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_matches: Vec<TextMatch>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LabelSearchItem {
    #[serde(flatten)]
    pub label: Label,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_matches: Vec<TextMatch>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CommitSearchItem {
    pub url: String,
    pub sha: String,
    pub node_id: String,
    pub html_url: String,
    pub comments_url: String,
    pub commit: CommitSearchDetail,
    pub author: Option<SimpleUser>,
    pub committer: Option<SimpleUser>,
    pub repository: MinimalRepository,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_matches: Vec<TextMatch>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CommitSearchDetail {
    pub url: String,
    pub author: CommitSearchAuthor,
    pub committer: Option<crate::git::Authorship>,
    pub message: String,
    pub tree: crate::repos::TreeLink,
    pub comment_count: usize,
}

// unlike git::Authorship the date is always present here
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CommitSearchAuthor {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

/// Field to sort search results by; default is best-match, which has
/// no wire name.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SearchSort {
    Stars,
    Forks,
    HelpWantedIssues,
    Updated,
    Comments,
    Reactions,
    Interactions,
    Created,
    CommitterDate,
    AuthorDate,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    Asc,
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_envelope() {
        let r: SearchResults<LabelSearchItem> = serde_json::from_value(json!({
            "total_count": 1,
            "incomplete_results": false,
            "items": [{
                "id": 418327088,
                "node_id": "MDU6TGFiZWw0MTgzMjcwODg=",
                "url": "https://api.github.com/repos/octocat/linguist/labels/enhancement",
                "name": "enhancement",
                "color": "84b6eb",
                "default": true,
                "description": "New feature or request.",
                "score": 1.0
            }]
        }))
        .unwrap();
        assert_eq!(r.total_count, 1);
        assert!(!r.incomplete_results);
        // flattened item keeps the label fields reachable
        assert_eq!(r.items[0].label.name, "enhancement");
        assert!(r.items[0].text_matches.is_empty());
    }

    #[test]
    fn sort_kebab_names() {
        assert_eq!(
            serde_json::to_value(SearchSort::HelpWantedIssues).unwrap(),
            json!("help-wanted-issues")
        );
    }
}
