//! Comment filtering for extracted code snippets.
//!
//! Removes full-line and trailing inline comments from code content,
//! using the language's [`CommentStyle`] to identify delimiters. String
//! literals are preserved — comment-like sequences inside strings are
//! not treated as comments. Block comments spanning multiple lines are
//! removed in full, including the partial lines at their boundaries.

use lang_support::CommentStyle;

/// Tracks string and block-comment state across lines while filtering.
#[derive(Debug, Default)]
struct FilterState {
    in_block_comment: bool,
    in_string: bool,
    string_char: Option<char>,
}

/// True when `chars[i..]` starts with `token`.
fn token_at(chars: &[char], i: usize, token: &str) -> bool {
    let mut j = i;
    for t in token.chars() {
        if chars.get(j) != Some(&t) {
            return false;
        }
        j += 1;
    }
    true
}

/// Filters one line.
///
/// Returns `None` when the whole line should be dropped (comment-only,
/// or interior of a block comment); otherwise the kept portion,
/// right-trimmed if anything was removed. Blank lines outside block
/// comments pass through unchanged.
fn strip_line(line: &str, style: &CommentStyle, state: &mut FilterState) -> Option<String> {
    if !state.in_block_comment && line.trim().is_empty() {
        return Some(line.to_string());
    }

    let chars: Vec<char> = line.chars().collect();
    let mut kept = String::new();
    let mut i = 0;

    while i < chars.len() {
        if state.in_block_comment {
            match style.block_comment_end {
                Some(end) if token_at(&chars, i, end) => {
                    state.in_block_comment = false;
                    i += end.chars().count();
                }
                _ => i += 1,
            }
            continue;
        }

        if state.in_string {
            if chars[i] == '\\' {
                kept.push(chars[i]);
                if let Some(&next) = chars.get(i + 1) {
                    kept.push(next);
                }
                i += 2;
                continue;
            }
            if Some(chars[i]) == state.string_char {
                state.in_string = false;
                state.string_char = None;
            }
            kept.push(chars[i]);
            i += 1;
            continue;
        }

        if let Some(lc) = style.line_comment {
            if token_at(&chars, i, lc) {
                break;
            }
        }

        if let Some(open) = style.block_comment_start {
            if token_at(&chars, i, open) {
                state.in_block_comment = true;
                i += open.chars().count();
                continue;
            }
        }

        if style.string_delimiters.contains(&chars[i]) {
            state.in_string = true;
            state.string_char = Some(chars[i]);
        }

        kept.push(chars[i]);
        i += 1;
    }

    if kept == line {
        // Nothing was removed: the line passes through untouched.
        return Some(kept);
    }

    let kept = kept.trim_end();
    if kept.trim().is_empty() {
        None
    } else {
        Some(kept.to_string())
    }
}

/// Removes comments from code content using the given comment style.
///
/// Full-line comments are dropped. Trailing inline comments are stripped
/// from code lines (with trailing whitespace removed). Blank lines are
/// preserved. Lines with no comment token are returned unchanged.
pub fn filter_comments(content: &str, style: &CommentStyle) -> String {
    let normalized = content.replace("\r\n", "\n");
    let mut state = FilterState::default();
    let mut kept_lines: Vec<String> = Vec::new();

    for line in normalized.split('\n') {
        if let Some(filtered) = strip_line(line, style, &mut state) {
            kept_lines.push(filtered);
        }
    }

    kept_lines.join("\n")
}
