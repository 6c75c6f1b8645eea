//! Placeholder templates for the title order document.
//!
//! A template is plain LaTeX with `{{name}}` tokens drawn from a closed set
//! of [`Placeholder`]s. Parsing validates the token set up front, so a
//! template that references a placeholder twice or names an unknown one is
//! rejected before anything is rendered or compiled.

use std::fmt;

use thiserror::Error;

use super::format::{format_multiline, format_parcel_table, format_profile_flag, format_scope_items};
use super::escape::{escape_latex, escape_optional};
use super::record::DocumentRecord;

/// The placeholders a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Title,
    DateOrdered,
    TitleScopeItems,
    ErItems,
    IncludePropertyProfile,
    DeliveryInstructions,
    DeliveryEmail,
    Parcels,
}

impl Placeholder {
    pub const ALL: [Placeholder; 8] = [
        Placeholder::Title,
        Placeholder::DateOrdered,
        Placeholder::TitleScopeItems,
        Placeholder::ErItems,
        Placeholder::IncludePropertyProfile,
        Placeholder::DeliveryInstructions,
        Placeholder::DeliveryEmail,
        Placeholder::Parcels,
    ];

    /// Canonical token name.
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Title => "title",
            Placeholder::DateOrdered => "date_ordered",
            Placeholder::TitleScopeItems => "title_scope_items",
            Placeholder::ErItems => "er_items",
            Placeholder::IncludePropertyProfile => "include_property_profile",
            Placeholder::DeliveryInstructions => "delivery_instructions",
            Placeholder::DeliveryEmail => "delivery_email",
            Placeholder::Parcels => "parcels",
        }
    }

    /// Resolve a token name, accepting the short aliases older templates use.
    pub fn from_token(name: &str) -> Option<Self> {
        let placeholder = match name {
            "title" => Placeholder::Title,
            "date_ordered" => Placeholder::DateOrdered,
            "title_scope_items" | "title_scope" => Placeholder::TitleScopeItems,
            "er_items" | "ers" => Placeholder::ErItems,
            "include_property_profile" => Placeholder::IncludePropertyProfile,
            "delivery_instructions" => Placeholder::DeliveryInstructions,
            "delivery_email" => Placeholder::DeliveryEmail,
            "parcels" => Placeholder::Parcels,
            _ => return None,
        };
        Some(placeholder)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}}}}}", self.token())
    }
}

/// Errors raised while parsing a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Unknown placeholder '{{{{{name}}}}}' on line {line}")]
    UnknownPlaceholder { name: String, line: usize },

    #[error("Placeholder {placeholder} appears more than once (again on line {line})")]
    DuplicatePlaceholder { placeholder: Placeholder, line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Placeholder),
}

/// A parsed, validated template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source.
    ///
    /// Brace pairs whose content is not an identifier (ordinary LaTeX
    /// grouping such as `{{\large X}}`) are kept as literal text.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut seen: Vec<Placeholder> = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                break;
            };

            let name = after[..end].trim();
            if !is_identifier(name) {
                literal.push_str(&rest[..start + 1]);
                rest = &rest[start + 1..];
                continue;
            }

            let offset = source.len() - rest.len() + start;
            let line = source[..offset].matches('\n').count() + 1;

            let placeholder =
                Placeholder::from_token(name).ok_or_else(|| TemplateError::UnknownPlaceholder {
                    name: name.to_string(),
                    line,
                })?;
            if seen.contains(&placeholder) {
                return Err(TemplateError::DuplicatePlaceholder { placeholder, line });
            }
            seen.push(placeholder);

            literal.push_str(&rest[..start]);
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Field(placeholder));
            rest = &after[end + 2..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Placeholders referenced by this template, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(p) => Some(*p),
            Segment::Literal(_) => None,
        })
    }

    /// Placeholders the template never references.
    pub fn unused(&self) -> Vec<Placeholder> {
        Placeholder::ALL
            .into_iter()
            .filter(|p| !self.placeholders().any(|used| used == *p))
            .collect()
    }

    /// Substitute every placeholder with its formatted value.
    pub fn render(&self, values: &FieldValues) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(placeholder) => out.push_str(values.get(*placeholder)),
            }
        }
        out
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Formatted LaTeX fragments for every placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    pub title: String,
    pub date_ordered: String,
    pub title_scope_items: String,
    pub er_items: String,
    pub include_property_profile: String,
    pub delivery_instructions: String,
    pub delivery_email: String,
    pub parcels: String,
}

impl FieldValues {
    /// Format every field of the record.
    pub fn from_record(record: &DocumentRecord) -> Self {
        Self {
            title: escape_latex(&record.title),
            date_ordered: escape_optional(record.date_ordered.as_deref()),
            title_scope_items: format_scope_items(&record.title_scope_items),
            er_items: format_scope_items(&record.er_items),
            include_property_profile: format_profile_flag(
                record.include_property_profile.as_ref(),
            ),
            delivery_instructions: format_multiline(record.delivery_instructions.as_deref()),
            delivery_email: escape_optional(record.delivery_email.as_deref()),
            parcels: format_parcel_table(&record.parcels),
        }
    }

    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Title => &self.title,
            Placeholder::DateOrdered => &self.date_ordered,
            Placeholder::TitleScopeItems => &self.title_scope_items,
            Placeholder::ErItems => &self.er_items,
            Placeholder::IncludePropertyProfile => &self.include_property_profile,
            Placeholder::DeliveryInstructions => &self.delivery_instructions,
            Placeholder::DeliveryEmail => &self.delivery_email,
            Placeholder::Parcels => &self.parcels,
        }
    }
}
