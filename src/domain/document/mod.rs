//! Title order document rendering.
//!
//! Pure rendering logic: a [`DocumentRecord`] is escaped and formatted into
//! [`FieldValues`], substituted into a parsed [`Template`], and named with
//! [`artifact_file_name`]. Compilation and filesystem handling live in the
//! LaTeX adapter.

mod artifact_name;
mod escape;
mod format;
mod record;
mod template;

pub use artifact_name::{artifact_file_name, ARTIFACT_EXTENSION};
pub use escape::{escape_latex, escape_optional, NO_DATA};
pub use format::{format_multiline, format_parcel_table, format_profile_flag, format_scope_items};
pub use record::{DocumentRecord, ParcelRow, ProfileFlag, ScopeItem, ORDER_DATE_FORMAT};
pub use template::{FieldValues, Placeholder, Template, TemplateError};
