use serde::{Deserialize, Serialize};

use super::Pagination;
use crate::endpoint::{Endpoint, PaginationHeaders};
use crate::users::{Email, PrivateUser, PublicUser, SimpleUser, UserUpdate};

/// `GET /user`
pub const GET_AUTHENTICATED: Endpoint<(), PrivateUser> =
    Endpoint::new("users/get-authenticated", "users");

/// `GET /users/{username}`
pub const GET_BY_USERNAME: Endpoint<GetByUsernameParams, PublicUser> =
    Endpoint::new("users/get-by-username", "users");

/// `GET /users` — all accounts, in ascending id order.
pub const LIST: Endpoint<ListParams, Vec<SimpleUser>, PaginationHeaders> =
    Endpoint::new("users/list", "users");

/// `PATCH /user`
pub const UPDATE_AUTHENTICATED: Endpoint<UserUpdate, PrivateUser> =
    Endpoint::new("users/update-authenticated", "users");

/// `GET /user/emails`
pub const LIST_EMAILS_FOR_AUTHENTICATED_USER: Endpoint<
    Pagination,
    Vec<Email>,
    PaginationHeaders,
> = Endpoint::new("users/list-emails-for-authenticated-user", "users");

/// `GET /users/{username}/followers`
pub const LIST_FOLLOWERS_FOR_USER: Endpoint<
    ListFollowersParams,
    Vec<SimpleUser>,
    PaginationHeaders,
> = Endpoint::new("users/list-followers-for-user", "users");

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GetByUsernameParams {
    pub username: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ListParams {
    /// Only show users with an id greater than this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListFollowersParams {
    pub username: String,
    #[serde(flatten)]
    pub page: Pagination,
}
