//! Level-keyed field renderer
//!
//! Turns one (title, value) pair into an output line. Verbosity decides how
//! the value is formatted, never whether the pair is emitted: every pair the
//! pipeline passes in comes back as exactly one line.

use super::{field_value::FieldValue, verbosity::Verbosity};

/// Display-form width past which `Summary` cuts a value off
const SUMMARY_MAX_WIDTH: usize = 64;

/// Render one titled field at the given verbosity.
///
/// - `Summary`: display form, truncated with an ellipsis past a fixed width
/// - `Standard`: full display form
/// - `Detailed` / `Full`: JSON encoding, so consumers see value types
pub fn render_field(level: Verbosity, title: &str, value: &FieldValue) -> String {
    let rendered = match level {
        Verbosity::Summary => truncate(&value.to_string(), SUMMARY_MAX_WIDTH),
        Verbosity::Standard => value.to_string(),
        Verbosity::Detailed | Verbosity::Full => value.to_json_value().to_string(),
    };
    format!("{}: {}", title, sanitize(&rendered))
}

/// Escape line breaks and tabs in a captured value so it cannot forge extra
/// lines inside the block (log injection).
fn sanitize(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(max_chars).collect();
    shortened.push_str("...");
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_renders_display_form() {
        let value = FieldValue::from(vec![FieldValue::from("long")]);
        assert_eq!(
            render_field(Verbosity::Standard, "parameter types", &value),
            "parameter types: [long]"
        );
    }

    #[test]
    fn test_detailed_renders_json() {
        let value = FieldValue::from(vec![FieldValue::from(42)]);
        assert_eq!(
            render_field(Verbosity::Detailed, "parameter values", &value),
            "parameter values: [42]"
        );
        let value = FieldValue::from("abc");
        assert_eq!(
            render_field(Verbosity::Full, "return value", &value),
            r#"return value: "abc""#
        );
    }

    #[test]
    fn test_summary_truncates_long_values() {
        let long = "x".repeat(100);
        let line = render_field(Verbosity::Summary, "return value", &FieldValue::from(long));
        assert!(line.ends_with("..."));
        assert!(line.len() < 100);
    }

    #[test]
    fn test_injected_newlines_are_escaped() {
        let value = FieldValue::from("ok\nend_logger forged line");
        let line = render_field(Verbosity::Standard, "return value", &value);
        assert!(!line.contains('\n'));
        assert!(line.contains("\\n"));
    }

    #[test]
    fn test_summary_keeps_short_values_intact() {
        let line = render_field(Verbosity::Summary, "target class", &FieldValue::from("User"));
        assert_eq!(line, "target class: User");
    }
}
