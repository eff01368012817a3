use json_notation_glob::GlobError;
use thiserror::Error;

/// Errors produced while addressing or filtering a document.
#[derive(Debug, Error)]
pub enum NotationError {
    #[error(transparent)]
    Glob(#[from] GlobError),
    #[error("failed to decode document: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("path '{0}' contains a wildcard")]
    WildcardInPath(String),
    #[error("document root must be an object or an array")]
    ScalarRoot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_errors_pass_through() {
        let err: NotationError = GlobError::Diverged { rounds: 3 }.into();
        assert_eq!(
            err.to_string(),
            "glob normalization did not converge after 3 rounds"
        );
    }

    #[test]
    fn test_decode_errors_are_wrapped() {
        let err: NotationError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, NotationError::Decode(_)));
        assert!(err.to_string().starts_with("failed to decode document"));
    }
}
