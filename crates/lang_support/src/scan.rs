// crates/lang_support/src/scan.rs

//! The string/comment state machine.
//!
//! [`scan_line`] walks one line and returns only its "real code" — the
//! characters outside string literals and comments. Block-comment and
//! multi-line string state persists across lines through [`ScanState`],
//! which is created per invocation by the caller and never shared.

use crate::CommentStyle;

/// Tracks string and block-comment state across lines during a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Inside a block comment (`/* … */`).
    pub in_block_comment: bool,
    /// Inside a string literal.
    pub in_string: bool,
    /// The delimiter that opened the current string.
    pub string_char: Option<char>,
    /// Inside a triple-quoted string (Python).
    pub in_triple_quote: bool,
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

/// True when `chars[i..]` is three repetitions of `quote`.
fn triple_at(chars: &[char], i: usize, quote: char) -> bool {
    chars.get(i) == Some(&quote) && chars.get(i + 1) == Some(&quote) && chars.get(i + 2) == Some(&quote)
}

/// Scans a line and returns its code-only portion, with string-literal
/// contents and comments removed.
///
/// `state` is updated in place so block comments and multi-line strings
/// carry over to the next line. Backslash escapes inside strings are
/// honored.
pub fn scan_line(line: &str, state: &mut ScanState, style: &CommentStyle) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut code = String::new();
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

        if state.in_triple_quote {
            match state.string_char {
                Some(quote) if triple_at(&chars, i, quote) => {
                    state.in_triple_quote = false;
                    state.in_string = false;
                    state.string_char = None;
                    i += 3;
                }
                _ if chars[i] == '\\' => i += 2,
                _ => i += 1,
            }
            continue;
        }

        if state.in_string {
            if chars[i] == '\\' {
                i += 2;
            } else {
                if Some(chars[i]) == state.string_char {
                    state.in_string = false;
                    state.string_char = None;
                }
                i += 1;
            }
            continue;
        }

        let ch = chars[i];

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

        if style.triple_quote && style.string_delimiters.contains(&ch) && triple_at(&chars, i, ch) {
            state.in_triple_quote = true;
            state.in_string = true;
            state.string_char = Some(ch);
            i += 3;
            continue;
        }

        if style.string_delimiters.contains(&ch) {
            state.in_string = true;
            state.string_char = Some(ch);
            i += 1;
            continue;
        }

        code.push(ch);
        i += 1;
    }

    code
}
