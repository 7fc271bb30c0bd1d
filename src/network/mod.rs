//! HTTP networking module
//!
//! Provides the transport used to reach the search endpoint.

mod client;
mod transport;
mod user_agent;

pub use client::HttpClient;
pub use transport::{HttpResponse, Transport};
pub use user_agent::generate_user_agent;
