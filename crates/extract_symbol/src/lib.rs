//! Language-aware code symbol extraction.
//!
//! Given full file content and a symbol name, returns the contiguous
//! lines forming that symbol's textual declaration, using only lexical
//! cues — declaration regexes plus one of four block-closing strategies
//! (brace, paren, indent, keyword) from the file's [`LanguageConfig`].
//! No syntax tree is built.
//!
//! Dot notation scopes the lookup: `Outer.inner` finds `Outer` first and
//! then searches for `inner` only inside `Outer`'s block. The first
//! declaration in source order wins; same-named overloads are not
//! disambiguated.

use extract_errors::ExtractError;
use lang_support::{scan_line, BlockStrategy, LanguageConfig, ScanState};

mod block;

/// Widens an indent-strategy match to include directly preceding
/// decorator lines (`@wraps`, `@property`, …).
fn include_decorators(lines: &[String], start: usize) -> usize {
    let mut idx = start;
    while idx > 0 && lines[idx - 1].trim_start().starts_with('@') {
        idx -= 1;
    }
    idx
}

/// Searches `lines[range_start..=range_end]` for a declaration of `name`
/// and closes its block.
///
/// Lines that begin inside a string or block comment are skipped for
/// pattern matching. The first pattern (in config order) whose captured
/// identifier equals `name` commits: if its block never closes, the
/// whole search is unresolved rather than falling through to a later
/// declaration.
fn find_in_range(
    lines: &[String],
    name: &str,
    config: &LanguageConfig,
    range_start: usize,
    range_end: usize,
) -> Option<(usize, usize)> {
    let mut state = ScanState::default();

    for idx in range_start..=range_end {
        let clean = !state.in_block_comment && !state.in_string;
        if clean {
            for pat in &config.patterns {
                let captured = pat
                    .pattern
                    .captures(&lines[idx])
                    .and_then(|caps| caps.get(1));
                if captured.map(|m| m.as_str()) == Some(name) {
                    let end = block::block_end(lines, idx, &config.comment_style, pat.strategy)?;
                    let start = if pat.strategy == BlockStrategy::Indent {
                        include_decorators(lines, idx)
                    } else {
                        idx
                    };
                    return Some((start, end));
                }
            }
        }
        scan_line(&lines[idx], &mut state, &config.comment_style);
    }

    None
}

/// Extracts a named code symbol from source content.
///
/// Returns the lines of the symbol's declaration and block, inclusive of
/// the declaration line and (for brace, paren and keyword strategies) the
/// closing line.
///
/// # Errors
///
/// [`ExtractError::InvalidSelector`] for an empty symbol name;
/// [`ExtractError::Unresolved`] when no declaration matches or the
/// matched block never closes before end of file. No partial block is
/// ever returned.
pub fn extract_symbol(
    content: &str,
    symbol_name: &str,
    config: &LanguageConfig,
) -> Result<Vec<String>, ExtractError> {
    let name = symbol_name.trim();
    if name.is_empty() {
        return Err(ExtractError::InvalidSelector(
            "empty symbol name".to_string(),
        ));
    }

    let lines = lang_support::split_lines(content);
    let parts: Vec<&str> = name.split('.').collect();

    let not_found = || {
        ExtractError::Unresolved(format!(
            "symbol {name:?} not found in {} content",
            config.name
        ))
    };

    // Resolve scope parts first, narrowing the search range to each
    // enclosing block's body.
    let mut range_start = 0;
    let mut range_end = lines.len() - 1;
    for part in &parts[..parts.len() - 1] {
        let (start, end) =
            find_in_range(&lines, part, config, range_start, range_end).ok_or_else(not_found)?;
        range_start = start + 1;
        range_end = end;
    }

    let last = parts[parts.len() - 1];
    let (start, end) =
        find_in_range(&lines, last, config, range_start, range_end).ok_or_else(not_found)?;
    Ok(lines[start..=end].to_vec())
}
