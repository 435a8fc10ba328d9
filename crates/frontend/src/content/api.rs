use contracts::shared::content::{check_fragment, ContentError};
use contracts::shared::language::Language;
use gloo_net::http::Request;

/// Fetch the static HTML fragment for `language`.
pub async fn fetch_fragment(language: Language) -> Result<String, ContentError> {
    let response = Request::get(&language.content_path())
        .send()
        .await
        .map_err(|e| ContentError::Network(e.to_string()))?;

    let status = response.status();
    if !response.ok() {
        return Err(ContentError::Http(status));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ContentError::Network(e.to_string()))?;

    check_fragment(status, body)
}
