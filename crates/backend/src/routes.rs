use std::path::Path;
use std::sync::Arc;

use axum::{handler::Handler, routing::get, Router};
use tower_http::services::ServeDir;

use crate::{handlers, AppState};

/// Конфигурация всех роутов приложения
///
/// Anything not matched by an explicit route is served from `static_dir`.
/// Unmatched page paths fall back to its `index.html`; unmatched file paths
/// are 404.
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let shell = handlers::shell::app_shell.with_state(Arc::new(static_dir.join("index.html")));
    let static_files = ServeDir::new(static_dir).fallback(shell);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/content/:file", get(handlers::content::get_fragment))
        .fallback_service(static_files)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::path::PathBuf;
    use tower::ServiceExt;

    /// Fresh directory with the given files, unique per test.
    fn fixture_dir(name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "epidural-server-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        for (file, contents) in files {
            std::fs::write(dir.join(file), contents).unwrap();
        }
        dir
    }

    fn app(content_dir: PathBuf, static_dir: &Path) -> Router {
        configure_routes(AppState { content_dir }, static_dir)
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = fixture_dir("health", &[]);
        let (status, _, body) = fetch(app(dir.clone(), &dir), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_serves_language_fragment() {
        let dir = fixture_dir("fragment", &[("en.html", "<p>Epidural</p>")]);
        let (status, content_type, body) = fetch(app(dir.clone(), &dir), "/content/en.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
        assert_eq!(body, "<p>Epidural</p>");
    }

    #[tokio::test]
    async fn test_unknown_language_is_not_found() {
        let dir = fixture_dir("unknown", &[("fr.html", "<p>non</p>")]);
        let (status, _, _) = fetch(app(dir.clone(), &dir), "/content/fr.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_fragment_is_not_found() {
        let dir = fixture_dir("missing", &[("en.html", "<p>x</p>")]);
        let (status, _, body) = fetch(app(dir.clone(), &dir), "/content/ar.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "not found");
        assert!(!body.contains(&dir.display().to_string()));
    }

    #[tokio::test]
    async fn test_static_fallback_to_index() {
        let dir = fixture_dir("static", &[("index.html", "<html>shell</html>")]);
        let content = fixture_dir("static-content", &[]);
        let (status, _, body) = fetch(app(content, &dir), "/some/deep/link").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>shell</html>");
    }

    #[tokio::test]
    async fn test_fragment_under_page_path_is_not_shell() {
        let dir = fixture_dir("nested", &[("index.html", "<html>shell</html>")]);
        let content = fixture_dir("nested-content", &[("en.html", "<p>Epidural</p>")]);
        let (status, _, body) = fetch(app(content, &dir), "/info/content/en.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.contains("shell"));
    }

    #[tokio::test]
    async fn test_existing_static_file_is_served() {
        let dir = fixture_dir(
            "asset",
            &[("index.html", "<html>shell</html>"), ("app.js", "run()")],
        );
        let content = fixture_dir("asset-content", &[]);
        let (status, _, body) = fetch(app(content, &dir), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "run()");
    }
}
