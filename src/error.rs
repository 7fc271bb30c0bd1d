//! Error types for instagram-search
//!
//! Configuration problems are kept apart from search failures so the
//! entry point can abort the whole run on bad input while a single
//! failed search only affects its own result.

/// The caller-supplied input cannot be searched at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A search term was given without a search type.
    #[error("search type is required when a search term is provided")]
    MissingSearchType,

    /// The search type is not one of `user`, `place` or `hashtag`.
    #[error("unsupported search type \"{0}\", expected one of: user, place, hashtag")]
    UnsupportedSearchType(String),
}

/// Errors raised while resolving a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Invalid input, fatal for the whole run.
    #[error("invalid input: {0}")]
    Configuration(#[from] ConfigError),

    /// The HTTP call failed or returned a non-success status.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with something other than a JSON object.
    #[error("server returned a non-JSON answer")]
    MalformedResponse,

    /// Non-JSON answers on both the first attempt and the retry.
    #[error("search is blocked on current proxy IP")]
    BlockedProxy,

    /// JSON was returned but not in the shape expected for the search type.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl SearchError {
    /// Whether this error should stop the whole run rather than one search.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_search_type() {
        let err = SearchError::from(ConfigError::MissingSearchType);
        assert_eq!(
            err.to_string(),
            "invalid input: search type is required when a search term is provided"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn display_unsupported_search_type() {
        let err = ConfigError::UnsupportedSearchType("video".into());
        assert!(err.to_string().contains("\"video\""));
    }

    #[test]
    fn display_blocked_proxy() {
        let err = SearchError::BlockedProxy;
        assert_eq!(err.to_string(), "search is blocked on current proxy IP");
        assert!(!err.is_configuration());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
