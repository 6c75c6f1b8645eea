//! ClickUp task model and field lookup.

use serde::Deserialize;

use super::field::{CustomField, FieldKind};

/// A ClickUp task as returned by `GET /task/{id}?include_subtasks=true`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub custom_fields: Vec<CustomField>,

    #[serde(default)]
    pub subtasks: Vec<Task>,
}

impl Task {
    /// Whether `id` can be used as a single path segment of a task URL.
    ///
    /// ClickUp task ids (including custom ids) are alphanumeric with `-` or
    /// `_`; anything else could step out of `task/{id}`.
    pub fn is_valid_id(id: &str) -> bool {
        !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    /// First custom field whose name contains `fragment`, ignoring case.
    ///
    /// Matching is by substring, as the title order workspace names its
    /// fields loosely ("Date Ordered", "Date ordered (client)", ...).
    pub fn field(&self, fragment: &str) -> Option<&CustomField> {
        let fragment = fragment.to_lowercase();
        self.custom_fields
            .iter()
            .find(|f| f.name.to_lowercase().contains(&fragment))
    }

    /// Like [`Task::field`] but only considers fields of the given kind.
    pub fn field_of_kind(&self, fragment: &str, kind: FieldKind) -> Option<&CustomField> {
        let fragment = fragment.to_lowercase();
        self.custom_fields
            .iter()
            .filter(|f| f.value.kind() == kind)
            .find(|f| f.name.to_lowercase().contains(&fragment))
    }

    /// Text value of the first field matching `fragment`.
    pub fn text(&self, fragment: &str) -> Option<String> {
        self.field(fragment).and_then(|f| f.value.as_text())
    }
}
