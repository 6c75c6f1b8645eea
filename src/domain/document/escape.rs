//! LaTeX escaping for user-supplied text.

/// Placeholder glyph rendered when a field carries no data.
pub const NO_DATA: &str = "—";

/// Escape text for embedding in the LaTeX template.
///
/// Empty input maps to [`NO_DATA`]. Every character is mapped exactly once,
/// so the sequences introduced for one reserved character (for example the
/// braces in `\textbackslash{}`) are never escaped again by another.
pub fn escape_latex(text: &str) -> String {
    if text.is_empty() {
        return NO_DATA.to_string();
    }
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    push_escaped(&mut out, text);
    out
}

/// [`escape_latex`] for optional fields; `None` maps to [`NO_DATA`].
pub fn escape_optional(text: Option<&str>) -> String {
    escape_latex(text.unwrap_or_default())
}

/// Append the escaped form of `text` to `out` without the empty sentinel.
pub(crate) fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' => out.push_str(r"\&"),
            '%' => out.push_str(r"\%"),
            '_' => out.push_str(r"\_"),
            '$' => out.push_str(r"\$"),
            '#' => out.push_str(r"\#"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '\n' => out.push_str(r"\newline "),
            other => out.push(other),
        }
    }
}
