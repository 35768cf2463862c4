use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Authorship {
    /// The name of the author or committer of the commit. You'll
    /// receive a `422` status code if `name` is omitted.
    pub name: String,
    /// The email of the author or committer of the commit. You'll
    /// receive a `422` status code if `email` is omitted.
    pub email: String,
    /// ISO 8601; GitHub is lenient about the exact shape, so this
    /// stays a string on the request side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlobEncoding {
    #[serde(rename = "base64")]
    Base64,
    #[serde(rename = "utf-8")]
    Utf8,
}
impl Default for BlobEncoding {
    fn default() -> Self {
        Self::Utf8
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateBlobRequest {
    pub content: String,
    #[serde(default)]
    pub encoding: BlobEncoding,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShortBlob {
    pub sha: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Blob {
    pub sha: String,
    pub node_id: String,
    pub url: String,
    /// Base64 with embedded newlines, as delivered.
    pub content: String,
    pub encoding: String,
    pub size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted_content: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateTreeRequest {
    pub tree: Vec<TreeEntry>,
    /// SHA of the tree to extend; omitted (not null) for a root tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_tree: Option<String>,
}
#[derive(Serialize, Deserialize, Debug)]
pub struct TreeEntry {
    /// the file referenced in the tree
    pub path: String,
    /// `100644`, `100755`, `040000`, `160000` or `120000`.
    pub mode: String,
    #[serde(flatten)]
    pub item: TreeItem,
}
#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum TreeItem {
    Blob(BlobItem),
    Commit { sha: String },
    Tree { sha: String },
}
#[derive(Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum BlobItem {
    Content { content: String },
    Sha { sha: Option<String> },
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Tree {
    pub sha: String,
    pub url: String,
    pub tree: Vec<TreeResponseEntry>,
    /// Set when the tree exceeds GitHub's size limit and the listing
    /// was cut off.
    pub truncated: bool,
}
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TreeResponseEntry {
    pub path: String,
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(flatten)]
    pub obj: ShortObject,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShortObject {
    /// `blob`, `tree`, `commit` or `tag`.
    pub r#type: String,
    pub sha: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateCommitRequest {
    /// The commit message
    pub message: String,
    /// The SHA of the tree object this commit points to
    pub tree: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,
    #[serde(
        default,
        deserialize_with = "crate::utils::unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<Option<Authorship>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committer: Option<Authorship>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GitCommit {
    pub sha: String,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub author: Authorship,
    pub committer: Authorship,
    pub message: String,
    pub tree: ShortObject,
    pub parents: Vec<ShortObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<crate::repos::Verification>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateRefRequest {
    pub sha: String,
    /// fully qualified reference, e.g. `refs/heads/featureA`; must
    /// contain at least two slashes
    pub r#ref: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UpdateRefRequest {
    pub sha: String,
    /// Allow non-fast-forward updates.
    #[serde(default)]
    pub force: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GitRef {
    pub r#ref: String,
    pub node_id: String,
    pub url: String,
    pub object: ShortObject,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaggedObjectType {
    Commit,
    Tree,
    Blob,
}
impl Default for TaggedObjectType {
    fn default() -> Self {
        Self::Commit
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateTagRequest {
    /// The tag's name, e.g. `v0.0.1`.
    pub tag: String,
    pub message: String,
    /// The SHA of the git object this is tagging.
    pub object: String,
    #[serde(default)]
    pub r#type: TaggedObjectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagger: Option<Authorship>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Tag {
    pub sha: String,
    pub node_id: String,
    pub url: String,
    pub tag: String,
    pub message: String,
    pub tagger: Authorship,
    pub object: ShortObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<crate::repos::Verification>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tree_entry_tagging() {
        let e: TreeEntry = serde_json::from_value(json!({
            "path": "file.rb",
            "mode": "100644",
            "type": "blob",
            "content": "puts 'hi'"
        }))
        .unwrap();
        assert!(matches!(
            e.item,
            TreeItem::Blob(BlobItem::Content { .. })
        ));

        let e: TreeEntry = serde_json::from_value(json!({
            "path": "subdir",
            "mode": "040000",
            "type": "tree",
            "sha": "f484d249c660418515fb01c2b9662073663c242e"
        }))
        .unwrap();
        assert!(matches!(e.item, TreeItem::Tree { .. }));

        // unknown object types must be rejected, not silently mistyped
        assert!(serde_json::from_value::<TreeEntry>(json!({
            "path": "x",
            "mode": "100644",
            "type": "symlink",
            "sha": "abc"
        }))
        .is_err());
    }

    #[test]
    fn commit_author_tristate() {
        let c: CreateCommitRequest = serde_json::from_value(json!({
            "message": "my commit message",
            "tree": "827efc6d56897b048c772eb4087f854f46256132",
            "parents": ["7d1b31e74ee336d15cbd21741bc88a537ed063a0"],
            "author": null
        }))
        .unwrap();
        assert_eq!(c.parents.len(), 1);
        assert!(matches!(c.author, Some(None)));
        assert!(c.committer.is_none());
    }

    #[test]
    fn blob_encoding_default() {
        let b: CreateBlobRequest =
            serde_json::from_value(json!({ "content": "Content of the blob" }))
                .unwrap();
        assert_eq!(b.encoding, BlobEncoding::Utf8);
        let v = serde_json::to_value(CreateBlobRequest {
            content: "x".into(),
            encoding: BlobEncoding::Base64,
        })
        .unwrap();
        assert_eq!(v["encoding"], "base64");
    }

    #[test]
    fn git_ref_object() {
        let r: GitRef = serde_json::from_value(json!({
            "ref": "refs/heads/featureA",
            "node_id": "MDM6UmVmcmVmcy9oZWFkcy9mZWF0dXJlQQ==",
            "url": "https://api.github.com/repos/octocat/Hello-World/git/refs/heads/featureA",
            "object": {
                "type": "commit",
                "sha": "aa218f56b14c9653891f9e74264a383fa43fefbd",
                "url": "https://api.github.com/repos/octocat/Hello-World/git/commits/aa218f56b14c9653891f9e74264a383fa43fefbd"
            }
        }))
        .unwrap();
        assert_eq!(r.object.r#type, "commit");
    }
}
