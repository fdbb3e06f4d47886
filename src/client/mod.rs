//! Backend Client Module
//!
//! Memoizing HTTP client for the auto-parts backend. Every GET is keyed by
//! its request signature and served from the shared TTL cache while fresh.

mod backend;
mod key;

pub use backend::{BackendClient, CacheStatus, Fetched};
pub use key::request_key;
