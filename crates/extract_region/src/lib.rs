//! Named region extraction.
//!
//! A region is a span of lines delimited by marker comments:
//!
//! ```text
//! // md.start: setup
//! let pool = Pool::connect(url);
//! // md.end: setup
//! ```
//!
//! Markers must sit inside a comment — a line starting (after optional
//! whitespace) with one of `#`, `//`, `<!--` or `/*`. The marker token
//! itself is configurable; `md.start` / `md.end` are the defaults. The
//! returned span excludes both marker lines.

use extract_errors::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Default token announcing a region start.
pub const DEFAULT_REGION_START: &str = "md.start";
/// Default token announcing a region end.
pub const DEFAULT_REGION_END: &str = "md.end";

// The comment openers a marker may hide behind. Extending this set is a
// data change only.
const COMMENT_OPENERS: &str = r"(?:#|//|<!--|/\*)";

/// Builds the marker regex for one template token. The template is taken
/// literally; the region name is whatever follows the colon.
fn marker_pattern(template: &str) -> Regex {
    let source = format!(
        r"(?i)^\s*{COMMENT_OPENERS}\s*{}\s*:\s*(\S+)",
        regex::escape(template)
    );
    // The template is escaped, the rest is fixed: this always compiles.
    Regex::new(&source).expect("escaped marker template compiles")
}

static DEFAULT_START: Lazy<Regex> = Lazy::new(|| marker_pattern(DEFAULT_REGION_START));
static DEFAULT_END: Lazy<Regex> = Lazy::new(|| marker_pattern(DEFAULT_REGION_END));

fn marker_matches(pattern: &Regex, line: &str, name: &str) -> bool {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str() == name)
        .unwrap_or(false)
}

fn extract_with_patterns(
    content: &str,
    region_name: &str,
    start: &Regex,
    end: &Regex,
) -> Result<Vec<String>, ExtractError> {
    let lines: Vec<String> = content
        .replace("\r\n", "\n")
        .split('\n')
        .map(str::to_string)
        .collect();
    let name = region_name.trim();
    let mut open_at: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        match open_at {
            // Only one open region is tracked; start markers for other
            // names seen while open are ignored.
            None => {
                if marker_matches(start, line, name) {
                    open_at = Some(i + 1);
                }
            }
            Some(body_start) => {
                if marker_matches(end, line, name) {
                    return Ok(lines[body_start..i].to_vec());
                }
            }
        }
    }

    Err(match open_at {
        None => ExtractError::Unresolved(format!("region {name:?} not found")),
        Some(_) => ExtractError::Unresolved(format!("region {name:?} is never closed")),
    })
}

/// Extracts the lines between `md.start: <name>` and `md.end: <name>`
/// markers, exclusive of the marker lines themselves.
///
/// # Errors
///
/// [`ExtractError::Unresolved`] when no start marker carries the
/// requested name, or the region is never closed.
pub fn extract_region(content: &str, region_name: &str) -> Result<Vec<String>, ExtractError> {
    extract_with_patterns(content, region_name, &DEFAULT_START, &DEFAULT_END)
}

/// Same engine as [`extract_region`] with custom marker tokens in place
/// of `md.start` / `md.end`.
pub fn extract_region_with_markers(
    content: &str,
    region_name: &str,
    start_template: &str,
    end_template: &str,
) -> Result<Vec<String>, ExtractError> {
    let start = marker_pattern(start_template);
    let end = marker_pattern(end_template);
    extract_with_patterns(content, region_name, &start, &end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_region() {
        let content = "// md.start: foo\nline1\nline2\n// md.end: foo\n";
        assert_eq!(
            extract_region(content, "foo").unwrap(),
            vec!["line1", "line2"]
        );
    }

    #[test]
    fn test_region_with_hash_and_html_comments() {
        let content = "# md.start: setup\nimport os\n# md.end: setup\n";
        assert_eq!(extract_region(content, "setup").unwrap(), vec!["import os"]);

        let content = "<!-- md.start: intro -->\nhello\n<!-- md.end: intro -->\n";
        assert_eq!(extract_region(content, "intro").unwrap(), vec!["hello"]);
    }

    #[test]
    fn test_marker_keyword_matching_is_case_insensitive() {
        let content = "// MD.START: foo\nbody\n// MD.End: foo\n";
        assert_eq!(extract_region(content, "foo").unwrap(), vec!["body"]);
    }

    #[test]
    fn test_region_name_comparison_is_exact() {
        let content = "// md.start: Foo\nbody\n// md.end: Foo\n";
        assert!(extract_region(content, "foo").is_err());
        assert!(extract_region(content, "Foo").is_ok());
    }

    #[test]
    fn test_colon_spacing_is_flexible() {
        let content = "// md.start : foo\nbody\n// md.end:foo\n";
        assert_eq!(extract_region(content, "foo").unwrap(), vec!["body"]);
    }

    #[test]
    fn test_missing_region() {
        let content = "// md.start: other\nbody\n// md.end: other\n";
        assert!(matches!(
            extract_region(content, "foo"),
            Err(ExtractError::Unresolved(_))
        ));
    }

    #[test]
    fn test_unterminated_region() {
        let content = "// md.start: open\ncontent\n";
        assert!(matches!(
            extract_region(content, "open"),
            Err(ExtractError::Unresolved(_))
        ));
    }

    #[test]
    fn test_empty_region_is_found_not_missing() {
        // Adjacent markers produce an empty match, which is distinct from
        // "not found".
        let content = "// md.start: empty\n// md.end: empty\n";
        assert_eq!(extract_region(content, "empty").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_interleaved_start_for_other_name_is_ignored() {
        // A second start marker before the close does not open a nested
        // region; the scan keeps looking for the original close.
        let content = "\
// md.start: outer
a
// md.start: inner
b
// md.end: outer
// md.end: inner
";
        assert_eq!(
            extract_region(content, "outer").unwrap(),
            vec!["a", "// md.start: inner", "b"]
        );
    }

    #[test]
    fn test_first_matching_region_wins() {
        let content = "\
// md.start: dup
first
// md.end: dup
// md.start: dup
second
// md.end: dup
";
        assert_eq!(extract_region(content, "dup").unwrap(), vec!["first"]);
    }

    #[test]
    fn test_custom_marker_templates() {
        let content = "# region: foo\nbody\n# endregion: foo\n";
        assert_eq!(
            extract_region_with_markers(content, "foo", "region", "endregion").unwrap(),
            vec!["body"]
        );
        // Default tokens do not match the custom markers.
        assert!(extract_region(content, "foo").is_err());
    }

    #[test]
    fn test_requested_name_is_trimmed() {
        let content = "// md.start: foo\nbody\n// md.end: foo\n";
        assert_eq!(extract_region(content, "  foo ").unwrap(), vec!["body"]);
    }

    #[test]
    fn test_marker_requires_comment_opener() {
        let content = "md.start: foo\nbody\nmd.end: foo\n";
        assert!(extract_region(content, "foo").is_err());
    }
}
