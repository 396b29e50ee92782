//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;
use crate::view::STYLESHEET_PATH;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::pages::get_root).post(handlers::document::post_root),
        )
        .route(STYLESHEET_PATH, get(static_files::stylesheet))
        .route(
            "/{title}",
            get(handlers::pages::get_page).post(handlers::editor::post_page),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderMap, Request, StatusCode, header};
    use docpad_storage::{Documentation, MockStorage, Page};
    use docpad_viewer::{Controller, StaticSource};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    const URL: &str = "https://example.com/docs.json";

    struct Response {
        status: StatusCode,
        headers: HeaderMap,
        body: String,
    }

    impl Response {
        fn location(&self) -> Option<&str> {
            self.headers
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok())
        }
    }

    fn doc() -> Documentation {
        Documentation::new(vec![Page::new("A", "alpha"), Page::new("B", "beta")])
    }

    fn router_with(storage: Arc<MockStorage>, source: StaticSource) -> Router {
        let mut controller = Controller::new(storage, Arc::new(source));
        controller.hydrate();
        create_router(Arc::new(AppState::new(controller, "test")))
    }

    fn loaded() -> (Router, Arc<MockStorage>) {
        let storage = Arc::new(MockStorage::new().with_documentation(&doc()));
        (router_with(Arc::clone(&storage), StaticSource::new()), storage)
    }

    async fn send(router: &Router, request: Request<Body>) -> Response {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        Response {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    async fn get(router: &Router, path: &str) -> Response {
        send(router, Request::get(path).body(Body::empty()).unwrap()).await
    }

    async fn post(router: &Router, path: &str, fields: &[(&str, &str)]) -> Response {
        let request = Request::post(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
            .unwrap();
        send(router, request).await
    }

    #[tokio::test]
    async fn test_unloaded_root_shows_url_form() {
        let router = router_with(Arc::new(MockStorage::new()), StaticSource::new());

        let response = get(&router, "/").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains(r#"name="url""#));
    }

    #[tokio::test]
    async fn test_security_headers() {
        let (router, _) = loaded();

        let response = get(&router, "/A").await;

        assert_eq!(response.headers["x-frame-options"], "DENY");
        assert_eq!(response.headers["x-content-type-options"], "nosniff");
        assert!(response.headers.contains_key("content-security-policy"));
    }

    #[tokio::test]
    async fn test_root_redirects_to_first_page() {
        let (router, _) = loaded();

        let response = get(&router, "/").await;

        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location(), Some("/A"));
    }

    #[tokio::test]
    async fn test_missing_page_redirects_to_first_page() {
        let (router, _) = loaded();

        let response = get(&router, "/Z").await;

        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location(), Some("/A"));
    }

    #[tokio::test]
    async fn test_existing_page_renders() {
        let (router, _) = loaded();

        let response = get(&router, "/B").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("<h1>B</h1>"));
        assert!(response.body.contains("<p>beta</p>"));
    }

    #[tokio::test]
    async fn test_encoded_title_route() {
        let storage = Arc::new(
            MockStorage::new()
                .with_documentation(&Documentation::new(vec![Page::new("Getting Started", "go")])),
        );
        let router = router_with(storage, StaticSource::new());

        let response = get(&router, "/Getting%20Started").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains(r#"class="selected""#));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_shows_error() {
        let router = router_with(Arc::new(MockStorage::new()), StaticSource::new());

        let response = post(&router, "/", &[("action", "fetch"), ("url", "")]).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location(), Some("/"));

        let page = get(&router, "/").await;
        assert!(page.body.contains("Please enter a valid URL."));
    }

    #[tokio::test]
    async fn test_fetch_success_persists_and_redirects() {
        let storage = Arc::new(MockStorage::new());
        let router = router_with(
            Arc::clone(&storage),
            StaticSource::new().with_document(URL, doc()),
        );

        let response = post(&router, "/", &[("action", "fetch"), ("url", URL)]).await;

        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location(), Some("/A"));
        assert_eq!(storage.raw(), Some(doc().to_json().unwrap()));
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_generic_error() {
        let router = router_with(
            Arc::new(MockStorage::new()),
            StaticSource::new().with_status(URL, 500),
        );

        let response = post(&router, "/", &[("action", "fetch"), ("url", URL)]).await;
        assert_eq!(response.location(), Some("/"));

        let page = get(&router, "/").await;
        assert!(page.body.contains("Something went wrong"));
        assert!(page.body.contains(r#"name="url""#));
    }

    #[tokio::test]
    async fn test_export_downloads_stored_json() {
        let (router, storage) = loaded();

        let response = post(&router, "/", &[("action", "export")]).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"documentation.json\""
        );
        assert_eq!(response.headers[header::CONTENT_TYPE], "application/json");
        assert!(response.headers.contains_key(header::ETAG));
        assert_eq!(Some(response.body), storage.raw());
    }

    #[tokio::test]
    async fn test_export_without_documentation() {
        let router = router_with(Arc::new(MockStorage::new()), StaticSource::new());

        let response = post(&router, "/", &[("action", "export")]).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_action() {
        let (router, _) = loaded();

        let response = post(&router, "/A", &[("action", "delete")]).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_edit_action_switches_to_form() {
        let (router, _) = loaded();

        let response = post(&router, "/A", &[("action", "edit")]).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location(), Some("/A"));

        let page = get(&router, "/A").await;
        assert!(page.body.contains(r#"<textarea name="bodyText""#));
        assert!(page.body.contains(r#"value="A""#));
    }

    #[tokio::test]
    async fn test_save_with_empty_title_is_rejected() {
        let (router, storage) = loaded();
        let writes = storage.write_count();

        let response = post(
            &router,
            "/A",
            &[("action", "save"), ("title", ""), ("bodyText", "alpha")],
        )
        .await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.body.contains("Title is required"));
        assert_eq!(storage.write_count(), writes);
    }

    #[tokio::test]
    async fn test_rejected_save_survives_reload() {
        let (router, _) = loaded();
        let response = post(
            &router,
            "/A",
            &[("action", "save"), ("title", ""), ("bodyText", "draft")],
        )
        .await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

        let page = get(&router, "/A").await;

        assert_eq!(page.status, StatusCode::OK);
        assert!(page.body.contains(r#"name="title" value="" aria-invalid="true""#));
        assert!(page.body.contains("Title is required"));
        assert!(page.body.contains(">\ndraft</textarea>"));
    }

    #[tokio::test]
    async fn test_save_rename_redirects_to_new_title() {
        let (router, storage) = loaded();

        let response = post(
            &router,
            "/A",
            &[("action", "save"), ("title", "C"), ("bodyText", "gamma")],
        )
        .await;

        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location(), Some("/C"));
        let stored = Documentation::from_json(&storage.raw().unwrap()).unwrap();
        assert_eq!(stored.titles().collect::<Vec<_>>(), vec!["C", "B"]);

        let page = get(&router, "/C").await;
        assert!(page.body.contains("<p>gamma</p>"));
    }

    #[tokio::test]
    async fn test_post_to_missing_page_is_not_applied() {
        let (router, storage) = loaded();
        let writes = storage.write_count();

        let response = post(
            &router,
            "/Z",
            &[("action", "save"), ("title", "Z"), ("bodyText", "zeta")],
        )
        .await;

        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location(), Some("/A"));
        assert_eq!(storage.write_count(), writes);
    }

    #[tokio::test]
    async fn test_stylesheet() {
        let (router, _) = loaded();

        let response = get(&router, STYLESHEET_PATH).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.headers[header::CONTENT_TYPE], "text/css; charset=utf-8");
        assert!(response.body.contains(".sidebar"));
    }
}
