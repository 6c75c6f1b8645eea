//! ClickUp adapters.
//!
//! - `ClickUpClient` - `TaskTracker` implementation over the ClickUp v2 REST API

mod client;

pub use client::ClickUpClient;
