//! Response models for the gateway API
//!
//! Forwarded backend bodies pass through untouched as JSON; these DTOs cover
//! the gateway's own endpoints.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    ClearResponse, CleanupResponse, EntryTtlResponse, ErrorResponse, HealthResponse,
    StatsResponse,
};
