use thiserror::Error;

/// Failures of one chat submission.
///
/// Every variant is terminal for that submission only; the terminal renders it
/// as a single transcript line (`Error: {variant}`) and stays usable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// No credential was configured for the selected provider.
    #[error("Missing API key. Check .env")]
    MissingApiKey,
    /// The endpoint answered with a non-success status; carries a truncated
    /// excerpt of the response body.
    #[error("{0}")]
    Http(String),
    /// Transport-level failure (connection, request encoding, stream read).
    #[error("{0}")]
    Network(String),
    /// The endpoint answered without a readable body stream.
    #[error("No response body")]
    NoBody,
}

/// Longest HTTP error-body excerpt surfaced in the transcript.
pub const MAX_ERROR_BODY_CHARS: usize = 100;

/// Truncates an HTTP error body to the transcript excerpt length.
pub fn truncate_error_body(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_key_renders_the_exact_transcript_message() {
        assert_eq!(
            format!("Error: {}", ChatError::MissingApiKey),
            "Error: Missing API key. Check .env"
        );
    }

    #[test]
    fn error_bodies_are_truncated_to_the_excerpt_limit() {
        let long = "x".repeat(500);
        assert_eq!(truncate_error_body(&long).len(), MAX_ERROR_BODY_CHARS);
        assert_eq!(truncate_error_body("short"), "short");
    }

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        let body: String = "é".repeat(120);
        let truncated = truncate_error_body(&body);
        assert_eq!(truncated.chars().count(), MAX_ERROR_BODY_CHARS);
    }
}
