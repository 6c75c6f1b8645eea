//! Field formatters turning record fields into LaTeX fragments.

use super::escape::{escape_latex, escape_optional, push_escaped, NO_DATA};
use super::record::{ParcelRow, ProfileFlag, ScopeItem};

/// Forced line break used between lines of prose blocks.
const LINE_BREAK: &str = r" \\ ";

/// Break marker placed between scope items.
const ITEM_SEPARATOR: &str = r"\newline ";

/// Row terminator for the parcel table.
const ROW_END: &str = r" \\ \hline";

/// Format a multi-line prose block such as delivery instructions.
///
/// Surrounding whitespace is trimmed and interior newlines become forced
/// line breaks rather than the escaper's `\newline` markers.
pub fn format_multiline(text: Option<&str>) -> String {
    let trimmed = text.unwrap_or_default().trim();
    if trimmed.is_empty() {
        return NO_DATA.to_string();
    }

    let mut out = String::with_capacity(trimmed.len());
    for (i, line) in trimmed.lines().enumerate() {
        if i > 0 {
            out.push_str(LINE_BREAK);
        }
        push_escaped(&mut out, line);
    }
    out
}

/// Format the title scope or E&R list.
///
/// Empty lists render as [`NO_DATA`]. Items are single-line: embedded line
/// breaks collapse to spaces before escaping.
pub fn format_scope_items(items: &[ScopeItem]) -> String {
    if items.is_empty() {
        return NO_DATA.to_string();
    }

    items
        .iter()
        .map(|item| {
            let name = single_line(&item.name);
            let description = item.description.as_deref().map(single_line).unwrap_or_default();

            let mut rendered = format!(r"\textbf{{{}}}", escape_latex(&name));
            if !description.is_empty() {
                rendered.push_str(": ");
                rendered.push_str(&escape_latex(&description));
            }
            rendered
        })
        .collect::<Vec<_>>()
        .join(ITEM_SEPARATOR)
        .trim_end()
        .to_string()
}

/// Format parcels as table rows. An empty list yields an empty table body.
pub fn format_parcel_table(parcels: &[ParcelRow]) -> String {
    parcels
        .iter()
        .map(|p| {
            format!(
                "{} & {} & {} & {}{}",
                escape_latex(&p.name),
                escape_latex(&p.parcel_id),
                escape_latex(&p.address),
                escape_latex(&p.county_st),
                ROW_END
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the property profile flag as `Yes`/`No` or the escaped label.
pub fn format_profile_flag(flag: Option<&ProfileFlag>) -> String {
    match flag {
        Some(ProfileFlag::Checked(true)) => "Yes".to_string(),
        Some(ProfileFlag::Checked(false)) => "No".to_string(),
        Some(ProfileFlag::Label(label)) => escape_latex(label.trim()),
        None => escape_optional(None),
    }
}

fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parcel(name: &str) -> ParcelRow {
        ParcelRow {
            name: name.to_string(),
            parcel_id: "R-100".to_string(),
            address: "1 Main St".to_string(),
            county_st: "Travis, TX".to_string(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Multiline
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn multiline_trims_and_breaks_lines() {
        let text = "\n\nCall first\nLeave at desk #2\n";
        assert_eq!(
            format_multiline(Some(text)),
            r"Call first \\ Leave at desk \#2"
        );
    }

    #[test]
    fn multiline_handles_crlf() {
        assert_eq!(format_multiline(Some("a\r\nb")), r"a \\ b");
    }

    #[test]
    fn multiline_empty_is_sentinel() {
        assert_eq!(format_multiline(None), NO_DATA);
        assert_eq!(format_multiline(Some(" \n ")), NO_DATA);
    }

    // ───────────────────────────────────────────────────────────────
    // Scope items
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn scope_items_empty_is_sentinel() {
        assert_eq!(format_scope_items(&[]), NO_DATA);
    }

    #[test]
    fn scope_item_with_description() {
        let items = [ScopeItem::new("Survey").with_description("Boundary check")];
        assert_eq!(format_scope_items(&items), r"\textbf{Survey}: Boundary check");
    }

    #[test]
    fn scope_items_join_with_newline_marker() {
        let items = [
            ScopeItem::new("Survey"),
            ScopeItem::new("Lien search").with_description("  "),
        ];
        assert_eq!(
            format_scope_items(&items),
            r"\textbf{Survey}\newline \textbf{Lien search}"
        );
    }

    #[test]
    fn scope_items_collapse_line_breaks() {
        let items = [ScopeItem::new("Title\r\nsearch\n").with_description("back\nto 1950")];
        assert_eq!(
            format_scope_items(&items),
            r"\textbf{Title search}: back to 1950"
        );
    }

    #[test]
    fn scope_items_escape_names() {
        let items = [ScopeItem::new("E&R #1")];
        assert_eq!(format_scope_items(&items), r"\textbf{E\&R \#1}");
    }

    // ───────────────────────────────────────────────────────────────
    // Parcel table
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn parcel_table_empty_has_zero_rows() {
        assert_eq!(format_parcel_table(&[]), "");
    }

    #[test]
    fn parcel_table_renders_rows() {
        let table = format_parcel_table(&[parcel("Lot_1"), parcel("Lot 2")]);
        let rows: Vec<&str> = table.lines().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], r"Lot\_1 & R-100 & 1 Main St & Travis, TX \\ \hline");
        assert!(rows[1].starts_with("Lot 2 & "));
    }

    #[test]
    fn parcel_table_blank_cell_is_sentinel() {
        let mut row = parcel("Lot 3");
        row.address.clear();
        assert_eq!(
            format_parcel_table(&[row]),
            r"Lot 3 & R-100 & — & Travis, TX \\ \hline"
        );
    }

    // ───────────────────────────────────────────────────────────────
    // Profile flag
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn profile_flag_variants() {
        assert_eq!(format_profile_flag(Some(&ProfileFlag::Checked(true))), "Yes");
        assert_eq!(format_profile_flag(Some(&ProfileFlag::Checked(false))), "No");
        assert_eq!(
            format_profile_flag(Some(&ProfileFlag::Label("Yes - 10yr".to_string()))),
            "Yes - 10yr"
        );
        assert_eq!(format_profile_flag(None), NO_DATA);
    }
}
