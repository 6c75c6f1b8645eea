//! Domain layer - pure title order logic with no I/O.
//!
//! - `document` - record model, escaping, formatting and template rendering
//! - `clickup` - ClickUp task model and record assembly

pub mod clickup;
pub mod document;
