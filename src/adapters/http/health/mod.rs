//! HTTP adapter for liveness and readiness.
//!
//! - `GET /` - "Backend server is running!"
//! - `GET /api/health` - Compiler availability and authorization state

pub mod handlers;

pub use handlers::{health, root, HealthResponse};
