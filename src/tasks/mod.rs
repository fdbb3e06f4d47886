//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the gateway is up.
//!
//! # Tasks
//! - TTL Cleanup: Removes expired cache entries at configured intervals

mod cleanup;

pub use cleanup::CacheSweeper;
