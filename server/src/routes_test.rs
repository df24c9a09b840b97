use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

#[test]
fn every_legacy_page_targets_an_app_route() {
    for (name, target) in LEGACY_PAGES {
        assert!(name.ends_with(".html"), "{name}");
        assert!(target.starts_with('/'), "{target}");
    }
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

async fn send(router: Router, uri: &str) -> axum::response::Response {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn with_app_fallback() -> Router {
    legacy_routes().fallback(|| async { (StatusCode::OK, "app") })
}

#[tokio::test]
async fn known_legacy_page_redirects_permanently() {
    let resp = send(with_app_fallback(), "/login.html").await;
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(resp.headers()["location"], "/login");

    let resp = send(with_app_fallback(), "/index.html").await;
    assert_eq!(resp.headers()["location"], "/");
}

#[tokio::test]
async fn unknown_single_segment_paths_reach_the_app() {
    for uri in ["/pricing", "/nope.html"] {
        let resp = send(with_app_fallback(), uri).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }
}
