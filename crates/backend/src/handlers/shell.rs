use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

/// True when the last path segment names a file (`en.html`, `app.js`).
/// Such requests get a 404 instead of the app shell, so a misrouted
/// fragment or asset fetch fails loudly on the client.
pub fn is_file_request(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'))
}

/// Fallback behind the static directory: client-side links get `index.html`.
pub async fn app_shell(State(index): State<Arc<PathBuf>>, uri: Uri) -> Response {
    if is_file_request(uri.path()) {
        tracing::debug!("no static file for {}", uri.path());
        return (StatusCode::NOT_FOUND, "not found").into_response();
    }
    match tokio::fs::read_to_string(index.as_path()).await {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!("app shell {} unreadable: {}", index.display(), e);
            (StatusCode::NOT_FOUND, "not found").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_requests() {
        assert!(is_file_request("/info/content/en.html"));
        assert!(is_file_request("/pkg/app.js"));
        assert!(!is_file_request("/"));
        assert!(!is_file_request("/some/deep/link"));
        assert!(!is_file_request("/v1.2/page/"));
    }
}
