//! Line range extraction using `..` notation.
//!
//! Supported selector forms: `10` (single line), `5..10` (inclusive
//! range), `10..` (from line to end of file), `..10` (from start to
//! line). Line numbers are 1-based.

use extract_errors::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;

static SINGLE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static LINE_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d*)\.\.(\d*)$").unwrap());

/// Returns `true` if `expression` is a syntactically valid line range
/// selector, without consulting any content.
pub fn is_valid_line_range(expression: &str) -> bool {
    SINGLE_LINE.is_match(expression) || LINE_RANGE.is_match(expression)
}

fn out_of_bounds(expression: &str, total: usize) -> ExtractError {
    ExtractError::Unresolved(format!(
        "line range {expression:?} is out of bounds for {total} lines"
    ))
}

fn parse_bound(digits: &str, expression: &str, total: usize) -> Result<usize, ExtractError> {
    // A bound too large for usize is certainly beyond the content.
    digits.parse().map_err(|_| out_of_bounds(expression, total))
}

/// Extracts the inclusive slice of lines selected by `expression`.
///
/// A missing start bound defaults to 1; a missing end bound defaults to
/// the total line count. An **explicit** end beyond the last line is an
/// error, not clamped; only the omitted default reaches exactly the end.
///
/// # Errors
///
/// [`ExtractError::InvalidSelector`] when `expression` matches neither
/// grammar; [`ExtractError::Unresolved`] when the selector is well-formed
/// but out of bounds or has `start > end`.
pub fn extract_line_range(content: &str, expression: &str) -> Result<Vec<String>, ExtractError> {
    let lines: Vec<String> = content
        .replace("\r\n", "\n")
        .split('\n')
        .map(str::to_string)
        .collect();
    let total = lines.len();

    if SINGLE_LINE.is_match(expression) {
        let n = parse_bound(expression, expression, total)?;
        if n < 1 || n > total {
            return Err(out_of_bounds(expression, total));
        }
        return Ok(lines[n - 1..n].to_vec());
    }

    let caps = LINE_RANGE
        .captures(expression)
        .ok_or_else(|| ExtractError::InvalidSelector(expression.to_string()))?;

    let start_digits = &caps[1];
    let end_digits = &caps[2];

    let start = if start_digits.is_empty() {
        1
    } else {
        parse_bound(start_digits, expression, total)?
    };
    let end = if end_digits.is_empty() {
        total
    } else {
        parse_bound(end_digits, expression, total)?
    };

    if start < 1 || start > total || start > end {
        return Err(out_of_bounds(expression, total));
    }
    if !end_digits.is_empty() && end > total {
        return Err(out_of_bounds(expression, total));
    }

    Ok(lines[start - 1..end].to_vec())
}
