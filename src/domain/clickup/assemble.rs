//! Build a [`DocumentRecord`] from a title order task.

use crate::domain::document::{DocumentRecord, ParcelRow, ORDER_DATE_FORMAT};

use super::field::FieldKind;
use super::task::Task;

/// Field name fragments used to locate title order fields.
pub mod field_names {
    pub const DATE_ORDERED: &str = "date ordered";
    pub const TITLE_SCOPE: &str = "title scope";
    pub const ER_ITEMS: &str = "e&r";
    pub const PROPERTY_PROFILE: &str = "property profile";
    pub const DELIVERY_INSTRUCTIONS: &str = "delivery instructions";
    pub const DELIVERY_EMAIL: &str = "email";
    pub const PARCEL_ID: &str = "parcel";
    pub const ADDRESS: &str = "address";
    pub const COUNTY: &str = "county";
}

/// Assemble the document record for a title order task.
///
/// Parcels come from the task's subtasks, one row each. Fields that are
/// missing upstream are left empty and render as the sentinel.
pub fn assemble_record(task: &Task) -> DocumentRecord {
    use field_names::*;

    DocumentRecord {
        title: task.name.clone(),
        date_ordered: task
            .field_of_kind(DATE_ORDERED, FieldKind::Date)
            .and_then(|f| f.value.as_date())
            .map(|date| date.format(ORDER_DATE_FORMAT).to_string()),
        title_scope_items: task
            .field(TITLE_SCOPE)
            .map(|f| f.value.scope_items())
            .unwrap_or_default(),
        er_items: task
            .field(ER_ITEMS)
            .map(|f| f.value.scope_items())
            .unwrap_or_default(),
        include_property_profile: task
            .field(PROPERTY_PROFILE)
            .and_then(|f| f.value.profile_flag()),
        delivery_instructions: task.text(DELIVERY_INSTRUCTIONS),
        delivery_email: task
            .field_of_kind(DELIVERY_EMAIL, FieldKind::Text)
            .and_then(|f| f.value.as_text()),
        parcels: task.subtasks.iter().map(parcel_row).collect(),
    }
}

fn parcel_row(subtask: &Task) -> ParcelRow {
    use field_names::*;

    ParcelRow {
        name: subtask.name.clone(),
        parcel_id: subtask.text(PARCEL_ID).unwrap_or_default(),
        address: subtask.text(ADDRESS).unwrap_or_default(),
        county_st: subtask.text(COUNTY).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{ProfileFlag, ScopeItem};
    use serde_json::json;

    fn title_order() -> Task {
        serde_json::from_value(json!({
            "id": "abc",
            "name": "Smith Estate #42",
            "custom_fields": [
                {"id": "1", "name": "Date Ordered", "type": "date", "value": "1767225600000"},
                {"id": "2", "name": "Title Scope", "type": "text",
                 "value": "Survey: Boundary check"},
                {"id": "3", "name": "E&Rs", "type": "labels", "value": [],
                 "type_config": {"options": []}},
                {"id": "4", "name": "Include Property Profile?", "type": "checkbox", "value": "true"},
                {"id": "5", "name": "Delivery Instructions", "type": "text",
                 "value": "Email PDF\nCall on arrival"},
                {"id": "6", "name": "Delivery Email", "type": "email", "value": "ops@example.com"}
            ],
            "subtasks": [
                {"id": "p1", "name": "Tract A", "custom_fields": [
                    {"id": "7", "name": "Parcel ID", "type": "short_text", "value": "R-1"},
                    {"id": "8", "name": "Address", "type": "text", "value": "1 Main St"},
                    {"id": "9", "name": "County/ST", "type": "short_text", "value": "Travis, TX"}
                ]},
                {"id": "p2", "name": "Tract B"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn assembles_all_fields() {
        let record = assemble_record(&title_order());

        assert_eq!(record.title, "Smith Estate #42");
        assert_eq!(record.order_date(), "01/01/2026");
        assert_eq!(
            record.title_scope_items,
            vec![ScopeItem::new("Survey").with_description("Boundary check")]
        );
        assert!(record.er_items.is_empty());
        assert_eq!(record.include_property_profile, Some(ProfileFlag::Checked(true)));
        assert_eq!(
            record.delivery_instructions.as_deref(),
            Some("Email PDF\nCall on arrival")
        );
        assert_eq!(record.delivery_email.as_deref(), Some("ops@example.com"));
    }

    #[test]
    fn subtasks_become_parcel_rows() {
        let record = assemble_record(&title_order());

        assert_eq!(record.parcels.len(), 2);
        assert_eq!(
            record.parcels[0],
            ParcelRow {
                name: "Tract A".to_string(),
                parcel_id: "R-1".to_string(),
                address: "1 Main St".to_string(),
                county_st: "Travis, TX".to_string(),
            }
        );
        assert_eq!(record.parcels[1].parcel_id, "");
    }

    #[test]
    fn missing_fields_stay_empty() {
        let task: Task = serde_json::from_value(json!({"id": "x", "name": "Bare"})).unwrap();
        let record = assemble_record(&task);

        assert!(record.order_date_missing());
        assert!(record.title_scope_items.is_empty());
        assert_eq!(record.include_property_profile, None);
        assert!(record.parcels.is_empty());
    }
}
