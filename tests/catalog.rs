//! Cross-module checks on the catalog surface: descriptors stay plain
//! metadata, and the resource shapes swallow GitHub-shaped payloads.

use github_api_types::endpoints::{issues, rate_limit, search};
use github_api_types::{Endpoint, RateLimitOverview};

use serde_json::json;

// a runtime would consume descriptors through a bound like this one
fn describe<P, R, H>(ep: Endpoint<P, R, H>) -> String {
    match ep.version() {
        Some(v) => format!("{} ({}, api {v})", ep.id(), ep.client_id()),
        None => format!("{} ({})", ep.id(), ep.client_id()),
    }
}

#[test]
fn descriptors_are_copyable_metadata() {
    let ep = issues::LIST_FOR_REPO;
    let again = ep; // Copy, no clone needed
    assert_eq!(describe(ep), describe(again));
    assert_eq!(describe(ep), "issues/list-for-repo (issues)");
    assert_eq!(
        describe(search::ISSUES_AND_PULL_REQUESTS),
        "search/issues-and-pull-requests (search)"
    );
}

#[test]
fn rate_limit_overview_shape() {
    let overview: RateLimitOverview = serde_json::from_value(json!({
        "resources": {
            "core": { "limit": 5000, "remaining": 4999, "reset": 1372700873, "used": 1 },
            "search": { "limit": 30, "remaining": 18, "reset": 1372697452, "used": 12 },
            "graphql": { "limit": 5000, "remaining": 4993, "reset": 1372700389, "used": 7 }
        },
        "rate": { "limit": 5000, "remaining": 4999, "reset": 1372700873, "used": 1 }
    }))
    .unwrap();
    assert_eq!(overview.resources.search.remaining, 18);
    assert!(overview.resources.integration_manifest.is_none());
    // `rate` mirrors `resources.core`
    assert_eq!(overview.rate.used, overview.resources.core.used);
    let _ = rate_limit::GET;
}

#[test]
fn unknown_response_fields_are_tolerated() {
    // GitHub grows its payloads without notice; response shapes must
    // not reject fields they do not know.
    let label: github_api_types::issues::Label = serde_json::from_value(json!({
        "id": 208045946,
        "node_id": "MDU6TGFiZWwyMDgwNDU5NDY=",
        "url": "https://api.github.com/repos/octocat/Hello-World/labels/bug",
        "name": "bug",
        "description": "Something isn't working",
        "color": "f29513",
        "default": true,
        "some_future_field": { "nested": true }
    }))
    .unwrap();
    assert_eq!(label.name, "bug");
}
