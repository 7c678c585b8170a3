use thiserror::Error;

/// Errors raised by the preference store.
///
/// None of these are fatal: a failed read is treated as "no stored
/// preference" and a failed write only loses best-effort durability. They
/// exist so the logging side channel carries a full error chain.
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("Failed to read preferences from {path}")]
    ReadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to write preferences to {path}")]
    WriteFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to create preferences directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = PrefsError::ReadFailed {
            path: "/test/preferences.json".to_string(),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "file not found",
            )),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read preferences from /test/preferences.json"
        );
    }

    #[test]
    fn test_error_source_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PrefsError::WriteFailed {
            path: "/test/preferences.json".to_string(),
            source: Box::new(io_err),
        };

        assert!(err.source().is_some());
    }
}
