//! Document record - the data a title order document is rendered from.
//!
//! Records arrive as loosely-shaped JSON from the frontend or are assembled
//! from a ClickUp task. No validation happens here: every field is optional
//! and absent values degrade to the "no data" sentinel when formatted.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::escape::NO_DATA;

/// Display format for order dates (`10/16/2026`).
pub const ORDER_DATE_FORMAT: &str = "%m/%d/%Y";

/// A single title order ready to be rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// Free-form order date as entered upstream. Defaulted to today by
    /// [`DocumentRecord::ensure_order_date`] when absent or the sentinel.
    pub date_ordered: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub title_scope_items: Vec<ScopeItem>,

    #[serde(deserialize_with = "null_as_default")]
    pub er_items: Vec<ScopeItem>,

    pub include_property_profile: Option<ProfileFlag>,

    pub delivery_instructions: Option<String>,

    pub delivery_email: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub parcels: Vec<ParcelRow>,
}

impl DocumentRecord {
    /// Create an otherwise empty record with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Returns true when the order date carries no usable value.
    pub fn order_date_missing(&self) -> bool {
        match self.date_ordered.as_deref().map(str::trim) {
            None => true,
            Some(date) => date.is_empty() || date == NO_DATA,
        }
    }

    /// Default the order date to `today` when it is missing.
    ///
    /// Mutates the record so the rendered date field and the artifact name
    /// derived from it stay consistent.
    pub fn ensure_order_date(&mut self, today: NaiveDate) {
        if self.order_date_missing() {
            self.date_ordered = Some(today.format(ORDER_DATE_FORMAT).to_string());
        }
    }

    /// The order date, or an empty string if it was never set.
    pub fn order_date(&self) -> &str {
        self.date_ordered.as_deref().unwrap_or_default()
    }
}

/// An entry in the title scope or E&R item lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeItem {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
}

impl ScopeItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One row of the parcel table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParcelRow {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub parcel_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub county_st: String,
}

/// Read an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The "include property profile" flag.
///
/// Upstream sends either a checkbox boolean or a drop-down label such as
/// `"Yes"`, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileFlag {
    Checked(bool),
    Label(String),
}
