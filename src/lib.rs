//! instagram-search: resolve Instagram top-search queries into direct links
//!
//! A search term and a search type (`user`, `place` or `hashtag`) are
//! sent to the web topsearch endpoint through an optional proxy. The
//! matching results come back as profile, location or tag URLs.

pub mod config;
pub mod error;
pub mod network;
pub mod search;
pub mod storage;

pub use config::Settings;
pub use error::{ConfigError, SearchError};
pub use network::{HttpClient, Transport};
pub use search::{SearchInput, SearchRequest, SearchResolver, SearchType};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
