//! ClickUp custom fields as a tagged union of field kinds.
//!
//! ClickUp serialises every custom field as `{id, name, type, value,
//! type_config}` where the shape of `value` depends on `type`. Fields are
//! decoded once into [`FieldValue`] so lookups never walk untyped JSON.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::document::{ProfileFlag, ScopeItem};

/// A decoded custom field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawCustomField")]
pub struct CustomField {
    pub id: String,
    pub name: String,
    pub value: FieldValue,
}

/// Discriminant of [`FieldValue`], used for typed lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Checkbox,
    DropDown,
    Labels,
    Relationship,
    Number,
    Unsupported,
}

/// Value of a custom field, by ClickUp field type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// `text`, `short_text`, `email`, `url`, `phone`.
    Text(Option<String>),
    /// `date`, stored upstream as epoch milliseconds.
    Date(Option<DateTime<Utc>>),
    Checkbox(bool),
    /// Selected option name of a `drop_down`.
    DropDown(Option<String>),
    /// Selected option names of a `labels` field.
    Labels(Vec<String>),
    /// Linked tasks of a `tasks` or `list_relationship` field.
    Relationship(Vec<String>),
    /// `number` and `currency`.
    Number(Option<f64>),
    Unsupported { kind: String },
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Date(_) => FieldKind::Date,
            FieldValue::Checkbox(_) => FieldKind::Checkbox,
            FieldValue::DropDown(_) => FieldKind::DropDown,
            FieldValue::Labels(_) => FieldKind::Labels,
            FieldValue::Relationship(_) => FieldKind::Relationship,
            FieldValue::Number(_) => FieldKind::Number,
            FieldValue::Unsupported { .. } => FieldKind::Unsupported,
        }
    }

    /// Single text value, if the field carries one.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(text) | FieldValue::DropDown(text) => {
                text.as_ref().filter(|t| !t.trim().is_empty()).cloned()
            }
            FieldValue::Number(n) => n.map(|n| n.to_string()),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Date(date) => *date,
            _ => None,
        }
    }

    /// Interpret the field as a list of scope items.
    ///
    /// Labels and linked tasks contribute one item per entry. Text fields
    /// contribute one item per line, split into name and description at the
    /// first `:`.
    pub fn scope_items(&self) -> Vec<ScopeItem> {
        match self {
            FieldValue::Labels(names) | FieldValue::Relationship(names) => {
                names.iter().map(ScopeItem::new).collect()
            }
            FieldValue::DropDown(Some(name)) => vec![ScopeItem::new(name)],
            FieldValue::Text(Some(text)) => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| match line.split_once(':') {
                    Some((name, description)) => {
                        ScopeItem::new(name.trim()).with_description(description.trim())
                    }
                    None => ScopeItem::new(line),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Interpret the field as the property profile flag.
    pub fn profile_flag(&self) -> Option<ProfileFlag> {
        match self {
            FieldValue::Checkbox(checked) => Some(ProfileFlag::Checked(*checked)),
            other => other.as_text().map(ProfileFlag::Label),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawCustomField {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    type_config: Option<Value>,
}

impl From<RawCustomField> for CustomField {
    fn from(raw: RawCustomField) -> Self {
        let value = decode_value(&raw.kind, raw.value.as_ref(), raw.type_config.as_ref());
        Self {
            id: raw.id,
            name: raw.name,
            value,
        }
    }
}

fn decode_value(kind: &str, value: Option<&Value>, config: Option<&Value>) -> FieldValue {
    match kind {
        "text" | "short_text" | "email" | "url" | "phone" => {
            FieldValue::Text(value.and_then(Value::as_str).map(str::to_string))
        }
        "date" => FieldValue::Date(value.and_then(as_i64).and_then(|ms| {
            Utc.timestamp_millis_opt(ms).single()
        })),
        "checkbox" => FieldValue::Checkbox(value.map(is_truthy).unwrap_or(false)),
        "drop_down" => FieldValue::DropDown(value.and_then(|v| drop_down_selection(v, config))),
        "labels" => FieldValue::Labels(
            value
                .and_then(Value::as_array)
                .map(|ids| ids.iter().filter_map(|id| label_name(id, config)).collect())
                .unwrap_or_default(),
        ),
        "tasks" | "list_relationship" => FieldValue::Relationship(
            value
                .and_then(Value::as_array)
                .map(|links| {
                    links
                        .iter()
                        .filter_map(|link| link.get("name").and_then(Value::as_str))
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        ),
        "number" | "currency" => FieldValue::Number(value.and_then(as_f64)),
        other => FieldValue::Unsupported {
            kind: other.to_string(),
        },
    }
}

fn options(config: Option<&Value>) -> &[Value] {
    config
        .and_then(|c| c.get("options"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Drop-down values are the selected option's `orderindex` (or its id).
fn drop_down_selection(value: &Value, config: Option<&Value>) -> Option<String> {
    options(config)
        .iter()
        .find(|option| {
            let by_index = match (option.get("orderindex").and_then(as_i64), as_i64(value)) {
                (Some(index), Some(selected)) => index == selected,
                _ => false,
            };
            by_index || option.get("id") == Some(value)
        })
        .and_then(|option| option.get("name").and_then(Value::as_str))
        .map(str::to_string)
}

/// Label values are option ids; the display text is the option's `label`.
fn label_name(id: &Value, config: Option<&Value>) -> Option<String> {
    options(config)
        .iter()
        .find(|option| option.get("id") == Some(id))
        .and_then(|option| {
            option
                .get("label")
                .or_else(|| option.get("name"))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
}

fn as_i64(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

fn as_f64(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_i64() == Some(1),
        _ => false,
    }
}
