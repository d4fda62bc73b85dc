use thiserror::Error;

/// Application-specific error types.
///
/// Only fatal conditions live here. A failed breach lookup is not an error:
/// it becomes an error record inside the result mapping.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or missing configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
    /// The search service could not produce a trustworthy employee list.
    #[error("Search service error: {0}")]
    SearchFailed(String),
    /// The result mapping could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Filesystem failure while writing results.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Error with context chain for better debugging.
    #[error("{context}: {source}")]
    WithContext {
        /// The underlying source of the error.
        #[source]
        source: Box<AppError>,
        /// Additional context message.
        context: String,
    },
}

impl From<reqwest::Error> for AppError {
    /// The only fatal HTTP exchange is the employee search.
    fn from(err: reqwest::Error) -> Self {
        AppError::SearchFailed(err.to_string())
    }
}

/// Extension trait for adding context to errors.
/// Similar to `anyhow::Context` but for our `AppError` type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T, AppError>;

    /// Add context lazily (only evaluated on error).
    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|e| AppError::WithContext {
            source: Box::new(e.into()),
            context: context.into(),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::WithContext {
            source: Box::new(e.into()),
            context: f(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wraps_message() {
        let result: Result<(), AppError> = Err(AppError::Config("missing key".to_string()));
        let err = result.context("Loading configuration").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Loading configuration: Configuration error: missing key"
        );
    }

    #[test]
    fn test_io_error_with_lazy_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result
            .with_context(|| "Writing results.json".to_string())
            .unwrap_err();
        assert!(matches!(err, AppError::WithContext { .. }));
        assert!(err.to_string().starts_with("Writing results.json: I/O error"));
    }
}
