// crates/extract_symbol/src/block.rs

//! Block-closing strategies.
//!
//! Given the index of a declaration line, each strategy finds the last
//! line of the declaration's block. Returns `None` when the block never
//! closes before end of file; the caller reports that as unresolved.

use lang_support::{scan_line, BlockStrategy, CommentStyle, ScanState};

/// Finds the inclusive end of the block opened at `start`, or `None` for
/// an unterminated block.
pub(crate) fn block_end(
    lines: &[String],
    start: usize,
    style: &CommentStyle,
    strategy: BlockStrategy,
) -> Option<usize> {
    match strategy {
        BlockStrategy::Brace => delimited_block_end(lines, start, style, '{', '}'),
        BlockStrategy::Paren => delimited_block_end(lines, start, style, '(', ')'),
        BlockStrategy::Indent => Some(indent_block_end(lines, start)),
        BlockStrategy::Keyword {
            openers,
            terminator,
        } => keyword_block_end(lines, start, style, openers, terminator),
    }
}

/// Counts `open` / `close` characters outside strings and comments from
/// the declaration line on (the declaration itself may already open).
/// The block closes on the line where depth returns to zero after having
/// been positive.
fn delimited_block_end(
    lines: &[String],
    start: usize,
    style: &CommentStyle,
    open: char,
    close: char,
) -> Option<usize> {
    let mut depth: i64 = 0;
    let mut opened = false;
    let mut state = ScanState::default();

    for (idx, line) in lines.iter().enumerate().skip(start) {
        let code = scan_line(line, &mut state, style);
        for ch in code.chars() {
            if ch == open {
                depth += 1;
                opened = true;
            } else if ch == close {
                depth -= 1;
            }
        }
        if opened && depth == 0 {
            return Some(idx);
        }
    }

    None
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|ch| ch.is_whitespace()).count()
}

/// The block is every subsequent line indented strictly deeper than the
/// declaration line; blank lines never terminate it. It ends before the
/// first non-blank line at or below the declaration's indentation, or at
/// end of file, with trailing blank lines trimmed.
fn indent_block_end(lines: &[String], start: usize) -> usize {
    let baseline = leading_whitespace(&lines[start]);
    let mut last_content = start;

    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        if line.trim().is_empty() {
            continue;
        }
        if leading_whitespace(line) <= baseline {
            break;
        }
        last_content = idx;
    }

    last_content
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Whole-word search, case-sensitive.
fn contains_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(pos) = text[from..].find(word) {
        let at = from + pos;
        let after = at + word.len();
        let before_ok = !text[..at].chars().next_back().is_some_and(is_word_char);
        let after_ok = !text[after..].chars().next().is_some_and(is_word_char);
        if before_ok && after_ok {
            return true;
        }
        from = after;
    }
    false
}

/// The declaration line opens the block at depth 1 and is not re-scanned.
/// Each later line whose code-only text contains an opener keyword
/// (whole-word) increments the depth once; a terminator match decrements
/// it once. The block closes, inclusive, where depth reaches zero.
fn keyword_block_end(
    lines: &[String],
    start: usize,
    style: &CommentStyle,
    openers: &[&str],
    terminator: &str,
) -> Option<usize> {
    let mut depth: i64 = 1;
    let mut state = ScanState::default();
    scan_line(&lines[start], &mut state, style);

    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        let code = scan_line(line, &mut state, style);
        if openers.iter().any(|kw| contains_word(&code, kw)) {
            depth += 1;
        }
        if contains_word(&code, terminator) {
            depth -= 1;
        }
        if depth == 0 {
            return Some(idx);
        }
    }

    None
}
