//! HTTP adapter for the ClickUp OAuth flow.
//!
//! - `GET /api/auth` - Redirect to ClickUp's authorization page
//! - `GET /api/callback` - Exchange the code, store the token, return to the frontend

pub mod handlers;
pub mod routes;

pub use routes::auth_routes;
