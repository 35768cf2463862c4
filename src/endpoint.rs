use std::marker::PhantomData;

use serde::Deserialize;

/// Descriptor for one REST operation: the OpenAPI operation id, the owning
/// client area, and optionally a pinned `X-GitHub-Api-Version`.
///
/// The three type parameters bind the request parameter shape, the response
/// body shape, and the typed selection of response headers (defaulting to
/// none). Nothing here executes; a runtime pairs the descriptor with a
/// transport.
pub struct Endpoint<Params, Response, Headers = ()> {
    id: &'static str,
    client_id: &'static str,
    version: Option<&'static str>,
    _shape: PhantomData<fn(Params) -> (Response, Headers)>,
}

impl<P, R, H> Endpoint<P, R, H> {
    pub const fn new(id: &'static str, client_id: &'static str) -> Self {
        Self {
            id,
            client_id,
            version: None,
            _shape: PhantomData,
        }
    }

    /// Descriptor pinned to a dated API version, for operations whose
    /// behavior differs across versions.
    pub const fn pinned(
        id: &'static str,
        client_id: &'static str,
        version: &'static str,
    ) -> Self {
        Self {
            id,
            client_id,
            version: Some(version),
            _shape: PhantomData,
        }
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }

    pub const fn client_id(&self) -> &'static str {
        self.client_id
    }

    pub const fn version(&self) -> Option<&'static str> {
        self.version
    }
}

// manual impls, the derives would bound P/R/H
impl<P, R, H> Clone for Endpoint<P, R, H> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<P, R, H> Copy for Endpoint<P, R, H> {}
impl<P, R, H> std::fmt::Debug for Endpoint<P, R, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("id", &self.id)
            .field("client_id", &self.client_id)
            .field("version", &self.version)
            .finish()
    }
}

/// `Link` header of paginated list responses, in GitHub's
/// `<url>; rel="next", <url>; rel="last"` form.
#[derive(Deserialize, Default, Clone, Debug)]
pub struct PaginationHeaders {
    #[serde(rename = "Link", default)]
    pub link: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RateLimitHeaders {
    #[serde(rename = "X-RateLimit-Limit")]
    pub limit: u64,
    #[serde(rename = "X-RateLimit-Remaining")]
    pub remaining: u64,
    /// Unix epoch seconds at which the window resets.
    #[serde(rename = "X-RateLimit-Reset")]
    pub reset: i64,
}
