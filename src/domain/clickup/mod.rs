//! ClickUp task model and title order record assembly.

mod assemble;
mod field;
mod task;

pub use assemble::{assemble_record, field_names};
pub use field::{CustomField, FieldKind, FieldValue};
pub use task::Task;
