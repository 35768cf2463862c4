use crate::endpoint::{Endpoint, RateLimitHeaders};
use crate::RateLimitOverview;

/// `GET /rate_limit` — the one endpoint that never counts against the
/// limit it reports.
pub const GET: Endpoint<(), RateLimitOverview, RateLimitHeaders> =
    Endpoint::new("rate-limit/get", "rate-limit");
