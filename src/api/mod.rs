//! API Module
//!
//! HTTP handlers and routing for the caching gateway.
//!
//! # Endpoints
//! - `GET /api/*path` - Forward a GET to the backend through the cache
//! - `DELETE /cache` - Drop every cached response
//! - `POST /cache/cleanup` - Sweep expired entries now
//! - `GET /cache/entry/*key` - Remaining TTL of one entry
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
