//! partcache - TTL response cache for the auto-parts backend
//!
//! Memoizes backend GET responses for a short window, either in-process
//! through [`client::BackendClient`] or as a caching HTTP gateway.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{SharedCache, TtlCache};
pub use config::Config;
pub use tasks::CacheSweeper;
