//! Search module
//!
//! Validates search input, queries the topsearch endpoint and turns the
//! results into direct profile, place and hashtag links.

pub mod format;
mod models;
pub mod response;
mod resolver;

pub use models::*;
pub use resolver::{SearchResolver, MAX_MALFORMED_RETRIES};
pub use response::TopSearchResults;
