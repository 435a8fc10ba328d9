use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use contracts::shared::language::Language;
use thiserror::Error;

use crate::AppState;

#[derive(Debug, Error)]
pub enum ContentServeError {
    #[error("unknown content file '{0}'")]
    UnknownFile(String),
    #[error("content file missing: {0}")]
    Missing(String),
    #[error("failed to read content: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ContentServeError {
    fn into_response(self) -> Response {
        // details (file system paths included) stay in the log
        let (status, body) = match &self {
            ContentServeError::UnknownFile(_) | ContentServeError::Missing(_) => {
                tracing::warn!("{}", self);
                (StatusCode::NOT_FOUND, "not found")
            }
            ContentServeError::Io(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        };
        (status, body).into_response()
    }
}

/// GET /content/:file
///
/// Serves `ar.html` or `en.html` from the content directory. Any other name
/// is rejected before touching the filesystem.
pub async fn get_fragment(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Response, ContentServeError> {
    let language =
        Language::from_content_file(&file).ok_or_else(|| ContentServeError::UnknownFile(file))?;

    let path = state.content_dir.join(language.content_file());
    let body = match tokio::fs::read_to_string(&path).await {
        Ok(body) => body,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ContentServeError::Missing(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        body,
    )
        .into_response())
}
