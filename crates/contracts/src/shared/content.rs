use thiserror::Error;

/// Why a content fragment could not be shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("empty content received")]
    Empty,
}

/// Accept a fetched fragment body. Whitespace-only bodies are rejected.
pub fn check_fragment(status: u16, body: String) -> Result<String, ContentError> {
    if !(200..300).contains(&status) {
        return Err(ContentError::Http(status));
    }
    if body.trim().is_empty() {
        return Err(ContentError::Empty);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_fragment() {
        assert_eq!(
            check_fragment(200, "<p>hi</p>".into()),
            Ok("<p>hi</p>".to_string())
        );
        assert_eq!(check_fragment(404, "nope".into()), Err(ContentError::Http(404)));
        assert_eq!(check_fragment(200, " \n\t".into()), Err(ContentError::Empty));
    }

    #[test]
    fn test_display() {
        assert_eq!(ContentError::Http(500).to_string(), "HTTP error! status: 500");
    }
}
