//! Typed view of the topsearch payload
//!
//! The endpoint returns one object holding `users`, `places` and/or
//! `hashtags` arrays. Only the array matching the requested
//! [`SearchType`] is read; anything else in the payload is ignored.

use super::format;
use super::models::SearchType;
use crate::error::SearchError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    pub username: String,
}

/// Entry of the `users` array.
///
/// The service nests the profile under `user`; a flat object is accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UserEntry {
    Nested { user: UserInfo },
    Flat(UserInfo),
}

impl UserEntry {
    pub fn user(&self) -> &UserInfo {
        match self {
            Self::Nested { user } | Self::Flat(user) => user,
        }
    }
}

/// Location primary key, sent as either a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LocationPk {
    Number(u64),
    Text(String),
}

impl fmt::Display for LocationPk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    pub pk: LocationPk,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceInfo {
    pub location: Location,
    pub slug: String,
}

/// Entry of the `places` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceEntry {
    pub place: PlaceInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HashtagInfo {
    pub name: String,
}

/// Entry of the `hashtags` array, nested under `hashtag` or flat
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HashtagEntry {
    Nested { hashtag: HashtagInfo },
    Flat(HashtagInfo),
}

impl HashtagEntry {
    pub fn hashtag(&self) -> &HashtagInfo {
        match self {
            Self::Nested { hashtag } | Self::Flat(hashtag) => hashtag,
        }
    }
}

/// Results for one search type, in service order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopSearchResults {
    Users(Vec<UserEntry>),
    Places(Vec<PlaceEntry>),
    Hashtags(Vec<HashtagEntry>),
}

impl TopSearchResults {
    /// Pick and decode the array for `search_type` out of `payload`
    pub fn parse(search_type: SearchType, mut payload: Map<String, Value>) -> Result<Self, SearchError> {
        let key = search_type.results_key();
        let entries = payload.remove(key).ok_or_else(|| {
            SearchError::UnexpectedShape(format!("response has no `{key}` array"))
        })?;

        Ok(match search_type {
            SearchType::User => Self::Users(decode(key, entries)?),
            SearchType::Place => Self::Places(decode(key, entries)?),
            SearchType::Hashtag => Self::Hashtags(decode(key, entries)?),
        })
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Users(v) => v.len(),
            Self::Places(v) => v.len(),
            Self::Hashtags(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Format every entry into its direct URL
    pub fn into_urls(self) -> Vec<String> {
        match self {
            Self::Users(v) => v.iter().map(|e| format::user_url(e.user())).collect(),
            Self::Places(v) => v.iter().map(|e| format::place_url(&e.place)).collect(),
            Self::Hashtags(v) => v.iter().map(|e| format::hashtag_url(e.hashtag())).collect(),
        }
    }
}

fn decode<T: DeserializeOwned>(key: &str, entries: Value) -> Result<Vec<T>, SearchError> {
    serde_json::from_value(entries)
        .map_err(|e| SearchError::UnexpectedShape(format!("invalid `{key}` entry: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_parse_users_nested_and_flat() {
        let payload = object(json!({
            "users": [
                {"position": 0, "user": {"username": "apify", "pk": "123"}},
                {"username": "flat"}
            ],
            "places": [],
            "hashtags": []
        }));
        let results = TopSearchResults::parse(SearchType::User, payload).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(
            results.into_urls(),
            vec!["https://www.instagram.com/apify/", "https://www.instagram.com/flat/"]
        );
    }

    #[test]
    fn test_parse_places_with_numeric_and_string_pk() {
        let payload = object(json!({
            "places": [
                {"place": {"location": {"pk": 6889842, "name": "Paris"}, "slug": "paris-france"}},
                {"place": {"location": {"pk": "1"}, "slug": "paris-fr"}}
            ]
        }));
        let urls = TopSearchResults::parse(SearchType::Place, payload)
            .unwrap()
            .into_urls();
        assert_eq!(
            urls,
            vec![
                "https://www.instagram.com/explore/locations/6889842/paris-france/",
                "https://www.instagram.com/explore/locations/1/paris-fr/",
            ]
        );
    }

    #[test]
    fn test_parse_hashtags() {
        let payload = object(json!({
            "hashtags": [
                {"position": 0, "hashtag": {"name": "sunset", "media_count": 10}},
                {"name": "rust"}
            ]
        }));
        let results = TopSearchResults::parse(SearchType::Hashtag, payload).unwrap();
        assert!(matches!(
            results,
            TopSearchResults::Hashtags(ref entries)
                if matches!(entries[0], HashtagEntry::Nested { .. })
                    && matches!(entries[1], HashtagEntry::Flat(_))
        ));
        assert_eq!(
            results.into_urls(),
            vec![
                "https://www.instagram.com/explore/tags/sunset/",
                "https://www.instagram.com/explore/tags/rust/",
            ]
        );
    }

    #[test]
    fn test_missing_array_is_shape_error() {
        let payload = object(json!({"users": []}));
        let err = TopSearchResults::parse(SearchType::Hashtag, payload).unwrap_err();
        assert!(matches!(err, SearchError::UnexpectedShape(ref m) if m.contains("hashtags")));
    }

    #[test]
    fn test_malformed_entry_is_shape_error() {
        let payload = object(json!({"places": [{"place": {"slug": "no-location"}}]}));
        let err = TopSearchResults::parse(SearchType::Place, payload).unwrap_err();
        assert!(matches!(err, SearchError::UnexpectedShape(_)));

        let payload = object(json!({"users": {"not": "an array"}}));
        assert!(TopSearchResults::parse(SearchType::User, payload).is_err());
    }

    #[test]
    fn test_empty_array() {
        let payload = object(json!({"users": []}));
        let results = TopSearchResults::parse(SearchType::User, payload).unwrap();
        assert!(results.is_empty());
        assert!(results.into_urls().is_empty());
    }
}
