use serde::{Deserialize, Serialize};

use super::Pagination;
use crate::endpoint::{Endpoint, PaginationHeaders};
use crate::git::{
    Blob, CreateBlobRequest, CreateCommitRequest, CreateRefRequest,
    CreateTagRequest, CreateTreeRequest, GitCommit, GitRef, ShortBlob, Tag,
    Tree, UpdateRefRequest,
};

/// `GET /repos/{owner}/{repo}/git/blobs/{file_sha}`
pub const GET_BLOB: Endpoint<ShaParams, Blob> =
    Endpoint::new("git/get-blob", "git");

/// `POST /repos/{owner}/{repo}/git/blobs`
pub const CREATE_BLOB: Endpoint<CreateBlobParams, ShortBlob> =
    Endpoint::new("git/create-blob", "git");

/// `GET /repos/{owner}/{repo}/git/commits/{commit_sha}`
pub const GET_COMMIT: Endpoint<CommitShaParams, GitCommit> =
    Endpoint::new("git/get-commit", "git");

/// `POST /repos/{owner}/{repo}/git/commits`
pub const CREATE_COMMIT: Endpoint<CreateCommitParams, GitCommit> =
    Endpoint::new("git/create-commit", "git");

/// `GET /repos/{owner}/{repo}/git/ref/{ref}` — the ref goes in
/// unqualified, `heads/featureA` not `refs/heads/featureA`.
pub const GET_REF: Endpoint<RefParams, GitRef> =
    Endpoint::new("git/get-ref", "git");

/// `GET /repos/{owner}/{repo}/git/matching-refs/{ref}` — prefix
/// matching, so `tags/v1` catches `v1.0`, `v1.1`…
pub const LIST_MATCHING_REFS: Endpoint<
    MatchingRefsParams,
    Vec<GitRef>,
    PaginationHeaders,
> = Endpoint::new("git/list-matching-refs", "git");

/// `POST /repos/{owner}/{repo}/git/refs`
pub const CREATE_REF: Endpoint<CreateRefParams, GitRef> =
    Endpoint::new("git/create-ref", "git");

/// `PATCH /repos/{owner}/{repo}/git/refs/{ref}`
pub const UPDATE_REF: Endpoint<UpdateRefParams, GitRef> =
    Endpoint::new("git/update-ref", "git");

/// `DELETE /repos/{owner}/{repo}/git/refs/{ref}`
pub const DELETE_REF: Endpoint<RefParams, ()> =
    Endpoint::new("git/delete-ref", "git");

/// `GET /repos/{owner}/{repo}/git/tags/{tag_sha}`
pub const GET_TAG: Endpoint<TagShaParams, Tag> =
    Endpoint::new("git/get-tag", "git");

/// `POST /repos/{owner}/{repo}/git/tags` — annotated tags only; the
/// tag is unreachable until a ref points at it.
pub const CREATE_TAG: Endpoint<CreateTagParams, Tag> =
    Endpoint::new("git/create-tag", "git");

/// `GET /repos/{owner}/{repo}/git/trees/{tree_sha}`
pub const GET_TREE: Endpoint<GetTreeParams, Tree> =
    Endpoint::new("git/get-tree", "git");

/// `POST /repos/{owner}/{repo}/git/trees`
pub const CREATE_TREE: Endpoint<CreateTreeParams, Tree> =
    Endpoint::new("git/create-tree", "git");

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShaParams {
    pub owner: String,
    pub repo: String,
    pub file_sha: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateBlobParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub body: CreateBlobRequest,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CommitShaParams {
    pub owner: String,
    pub repo: String,
    pub commit_sha: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateCommitParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub body: CreateCommitRequest,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RefParams {
    pub owner: String,
    pub repo: String,
    pub r#ref: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchingRefsParams {
    pub owner: String,
    pub repo: String,
    pub r#ref: String,
    #[serde(flatten)]
    pub page: Pagination,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateRefParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub body: CreateRefRequest,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateRefParams {
    pub owner: String,
    pub repo: String,
    pub r#ref: String,
    #[serde(flatten)]
    pub body: UpdateRefRequest,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TagShaParams {
    pub owner: String,
    pub repo: String,
    pub tag_sha: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateTagParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub body: CreateTagRequest,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GetTreeParams {
    pub owner: String,
    pub repo: String,
    pub tree_sha: String,
    /// Any truthy value recurses into subtrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursive: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateTreeParams {
    pub owner: String,
    pub repo: String,
    #[serde(flatten)]
    pub body: CreateTreeRequest,
}
