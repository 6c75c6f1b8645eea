//! Download-safe artifact names derived from record identity.

/// Extension of compiled artifacts.
pub const ARTIFACT_EXTENSION: &str = "pdf";

const TITLE_SEPARATOR: char = '_';
const DATE_SEPARATOR: char = '-';

/// Build `<title>_<date>.pdf` from a record's title and order date.
///
/// Runs of non-alphanumeric characters collapse to a single separator and
/// leading/trailing separators are dropped, so the name never contains path
/// components or doubled separators.
pub fn artifact_file_name(title: &str, date: &str) -> String {
    let title = collapse(title, TITLE_SEPARATOR);
    let title = if title.is_empty() { "untitled".to_string() } else { title };
    let date = collapse(date, DATE_SEPARATOR);

    if date.is_empty() {
        format!("{title}.{ARTIFACT_EXTENSION}")
    } else {
        format!("{title}{TITLE_SEPARATOR}{date}.{ARTIFACT_EXTENSION}")
    }
}

fn collapse(text: &str, separator: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending && !out.is_empty() {
                out.push(separator);
            }
            pending = false;
            out.push(ch);
        } else {
            pending = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_name_from_title_and_date() {
        assert_eq!(
            artifact_file_name("Smith Estate #42", "10/16/2026"),
            "Smith_Estate_42_10-16-2026.pdf"
        );
    }

    #[test]
    fn collapses_punctuation_runs() {
        let name = artifact_file_name("  A -- B // C!!  ", "1/2/2026");
        assert_eq!(name, "A_B_C_1-2-2026.pdf");
    }

    #[test]
    fn never_contains_path_components() {
        let name = artifact_file_name("../../etc/passwd", "../x");
        assert_eq!(name, "etc_passwd_x.pdf");
        assert!(!name.contains('/'));
    }

    #[test]
    fn non_ascii_is_treated_as_separator() {
        assert_eq!(artifact_file_name("Café Lot", "01/02/2026"), "Caf_Lot_01-02-2026.pdf");
    }

    #[test]
    fn empty_title_falls_back() {
        assert_eq!(artifact_file_name("###", "01/02/2026"), "untitled_01-02-2026.pdf");
    }

    #[test]
    fn empty_date_is_omitted() {
        assert_eq!(artifact_file_name("Deed", ""), "Deed.pdf");
    }

    #[test]
    fn no_consecutive_separators() {
        for title in ["a__b", "a _-_ b", "_a_", "a/b\\c"] {
            let name = artifact_file_name(title, "02//03//2026");
            let stem = name.trim_end_matches(".pdf");
            assert!(!stem.contains("__"), "{name}");
            assert!(!stem.contains("--"), "{name}");
            assert!(!stem.contains("_-") && !stem.contains("-_"), "{name}");
        }
    }
}
