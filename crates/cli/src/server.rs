use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use render_modes_core::{Error, PageId};
use render_modes_generator::markup::html_escape;
use render_modes_generator::{PageCache, Served, render_html};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::error;

const CACHE_HEADER: HeaderName = HeaderName::from_static("x-render-cache");
const POLICY_HEADER: HeaderName = HeaderName::from_static("x-render-policy");

#[derive(Clone)]
pub struct AppState {
    cache: Arc<PageCache>,
}

/// Routes every page as HTML and as a JSON document
pub fn router(cache: Arc<PageCache>) -> Router {
    Router::new()
        .route("/", get(hub_handler))
        .route("/{slug}", get(page_handler))
        .route("/api/pages/{slug}", get(document_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { cache })
}

async fn hub_handler(State(state): State<AppState>) -> Response {
    serve_html(&state, PageId::Home)
}

async fn page_handler(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match PageId::from_route(&format!("/{}", slug)) {
        Some(page) => serve_html(&state, page),
        None => not_found(&slug),
    }
}

async fn document_handler(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let Some(page) = PageId::from_slug(&slug) else {
        return not_found(&slug);
    };

    match state.cache.get(page) {
        Ok(served) => {
            let document = (*served.document).clone();
            with_render_headers(Json(document).into_response(), &served)
        }
        Err(err) => error_response(err),
    }
}

fn serve_html(state: &AppState, page: PageId) -> Response {
    match state.cache.get(page) {
        Ok(served) => {
            let html = render_html(&served.document);
            with_render_headers(Html(html).into_response(), &served)
        }
        Err(err) => error_response(err),
    }
}

fn with_render_headers(mut response: Response, served: &Served) -> Response {
    let headers = response.headers_mut();
    headers.insert(CACHE_HEADER, HeaderValue::from_static(served.status.as_str()));
    headers.insert(POLICY_HEADER, HeaderValue::from_static(served.policy.name()));
    response
}

fn not_found(slug: &str) -> Response {
    let html = format!(
        r#"<!DOCTYPE html>
<html><head><title>Not Found</title></head><body>
<h1>Page not found</h1>
<p>No page is served at /{}. <a href="/">Back to all rendering modes</a></p>
</body></html>"#,
        html_escape(slug)
    );
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}

fn error_response(err: Error) -> Response {
    match err {
        Error::UnknownPage(page) => not_found(&page),
        other => {
            error!(error = %other, "Page render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use render_modes_core::{Extras, PageDocument};
    use render_modes_generator::{ExtrasSource, ManualClock, Site};
    use tower::ServiceExt;

    struct ClockExtras;

    impl ExtrasSource for ClockExtras {
        fn extras(&self, _page: PageId, now: DateTime<Utc>) -> Extras {
            Extras::new()
                .with("Server Time", now.format("%H:%M:%S").to_string())
                .with("Focus Score", "42%")
        }
    }

    fn app() -> (Router, Arc<ManualClock>) {
        let site = Arc::new(Site::demo().unwrap());
        let ids = site.page_ids();
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 12, 8, 15, 0, 0).unwrap(),
        ));
        let cache = PageCache::new(site)
            .with_clock(clock.clone())
            .with_extras(Arc::new(ClockExtras));
        cache.warm(&ids).unwrap();
        (router(Arc::new(cache)), clock)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build");
        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");
        let status = response.status();
        let cache = response
            .headers()
            .get(CACHE_HEADER)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, cache, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_hub_is_prerendered() {
        let (app, _) = app();
        let (status, cache, body) = get(&app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache.as_deref(), Some("HIT"));
        assert!(body.contains("href=\"/news\""));
    }

    #[tokio::test]
    async fn test_about_page_is_static() {
        let (app, clock) = app();
        let (status, cache, body) = get(&app, "/about").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache.as_deref(), Some("HIT"));
        assert!(body.contains("Mukesh"));

        clock.advance(Duration::days(30));
        let (_, cache, again) = get(&app, "/about").await;
        assert_eq!(cache.as_deref(), Some("HIT"));
        assert_eq!(body, again);
    }

    #[tokio::test]
    async fn test_dashboard_bypasses_cache() {
        let (app, clock) = app();
        let (_, cache, first) = get(&app, "/dashboard").await;
        assert_eq!(cache.as_deref(), Some("BYPASS"));
        assert!(first.contains("15:00:00"));

        clock.advance(Duration::seconds(7));
        let (_, _, second) = get(&app, "/dashboard").await;
        assert!(second.contains("15:00:07"));
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_news_revalidates_after_window() {
        let (app, clock) = app();
        let (_, cache, _) = get(&app, "/news").await;
        assert_eq!(cache.as_deref(), Some("HIT"));

        clock.advance(Duration::seconds(60));
        let (_, cache, _) = get(&app, "/news").await;
        assert_eq!(cache.as_deref(), Some("REVALIDATED"));
    }

    #[tokio::test]
    async fn test_document_endpoint_returns_json() {
        let (app, _) = app();
        let (status, _, body) = get(&app, "/api/pages/news").await;
        assert_eq!(status, StatusCode::OK);

        let doc: PageDocument = serde_json::from_str(&body).unwrap();
        assert_eq!(doc.cards.len(), 3);
        assert_eq!(doc.banner.unwrap().mode, "ISR");
    }

    #[tokio::test]
    async fn test_unknown_paths_are_not_found() {
        let (app, _) = app();
        for uri in ["/blog", "/home", "/api/pages/blog"] {
            let (status, _, body) = get(&app, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert!(body.contains("Page not found"));
        }
    }
}
