//! Thin HTTP client for the Firecrawl backend.
//!
//! The backend does all of the actual crawling and scraping; this module
//! only forwards requests to its REST endpoints and relays the JSON
//! responses unchanged.

mod client;
mod error;

pub use client::FirecrawlClient;
pub use error::ClientError;
