//! Search input and request models

use crate::error::ConfigError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Number of URLs returned when the input does not say otherwise
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Which search context to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    User,
    Place,
    Hashtag,
}

impl SearchType {
    /// Value of the `context` query parameter
    pub fn context(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Place => "place",
            Self::Hashtag => "hashtag",
        }
    }

    /// Key of the result array in the response payload
    pub fn results_key(self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Place => "places",
            Self::Hashtag => "hashtags",
        }
    }

    /// Every supported search type
    pub fn all() -> &'static [SearchType] {
        &[Self::User, Self::Place, Self::Hashtag]
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.context())
    }
}

impl FromStr for SearchType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.context() == s)
            .ok_or_else(|| ConfigError::UnsupportedSearchType(s.to_string()))
    }
}

/// Raw caller input, as found in an `INPUT.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInput {
    /// Term to search for
    #[serde(default)]
    pub search: Option<String>,
    /// One of `user`, `place`, `hashtag`
    #[serde(default)]
    pub search_type: Option<String>,
    /// Maximum number of URLs to return
    #[serde(default)]
    pub search_limit: Option<usize>,
}

impl SearchInput {
    pub fn new(search: impl Into<String>, search_type: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            search_type: Some(search_type.into()),
            search_limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.search_limit = Some(limit);
        self
    }

    /// Read input from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid input JSON in {}", path.display()))
    }

    /// Validate into a [`SearchRequest`].
    ///
    /// An empty or absent search term yields `Ok(None)` without looking
    /// at the search type.
    pub fn to_request(&self, default_limit: usize) -> Result<Option<SearchRequest>, ConfigError> {
        let search = match self.search.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(None),
        };

        let search_type: SearchType = self
            .search_type
            .as_deref()
            .ok_or(ConfigError::MissingSearchType)?
            .parse()?;

        Ok(Some(SearchRequest {
            search: search.to_string(),
            search_type,
            limit: self.search_limit.unwrap_or(default_limit),
        }))
    }
}

/// A validated search, consumed by one resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub search: String,
    pub search_type: SearchType,
    pub limit: usize,
}

impl SearchRequest {
    pub fn new(search: impl Into<String>, search_type: SearchType) -> Self {
        Self {
            search: search.into(),
            search_type,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
