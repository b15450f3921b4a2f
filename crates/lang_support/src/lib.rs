//! `lang_support` — per-language data that keeps the rest of the
//! workspace free of giant `match ext { … }` chains.
//!
//!  * **Zero business-logic deps** – the crate only knows about source
//!    text and `regex`.
//!  * **Languages are data, not code** – one [`LanguageConfig`] row per
//!    language (declaration patterns, block strategy, comment style).
//!    Adding a language means adding a row in `configs.rs`.
//!  * **Thin adapter API** – other crates call `lang_support::for_extension()`
//!    and drive the scan themselves.

use regex::Regex;

pub mod scan;

mod configs;

pub use scan::{scan_line, ScanState};

/// How a language delimits comments and string literals.
///
/// Shared by the symbol extractor (to skip delimiters inside literals)
/// and the comment filter (to strip comments from extracted code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStyle {
    /// Line comment prefix (e.g. `"#"`, `"//"`, `"--"`).
    pub line_comment: Option<&'static str>,
    /// Block comment opening token (e.g. `"/*"`).
    pub block_comment_start: Option<&'static str>,
    /// Block comment closing token (e.g. `"*/"`).
    pub block_comment_end: Option<&'static str>,
    /// String delimiter characters.
    pub string_delimiters: &'static [char],
    /// Whether triple-quoted strings exist (Python).
    pub triple_quote: bool,
}

/// How a symbol's block is closed once its declaration line is found.
///
/// A tagged variant rather than per-language branching: each strategy
/// carries only the data it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStrategy {
    /// Count `{` / `}` outside strings and comments; the block closes on
    /// the line where depth returns to zero.
    Brace,
    /// Same as [`BlockStrategy::Brace`] but counting `(` / `)`.
    Paren,
    /// The block is every subsequent line indented strictly deeper than
    /// the declaration line (blank lines never terminate it).
    Indent,
    /// Declaration keywords pair with a terminator keyword (Ruby and Lua
    /// style `def … end`). The declaration itself opens the block.
    Keyword {
        /// Keywords that open one more nested block, matched whole-word.
        openers: &'static [&'static str],
        /// The keyword that closes a block, matched whole-word.
        terminator: &'static str,
    },
}

/// A declaration pattern for one kind of symbol within a language.
#[derive(Debug)]
pub struct SymbolPattern {
    /// Human-readable label (e.g. `"class"`, `"function"`, `"cte"`).
    pub kind: &'static str,
    /// Regex whose first capture group is the declared identifier.
    pub pattern: Regex,
    /// How to close the block opened by this declaration.
    pub strategy: BlockStrategy,
}

/// Complete language definition for symbol extraction.
#[derive(Debug)]
pub struct LanguageConfig {
    /// Language name, for diagnostics only.
    pub name: &'static str,
    /// File extensions handled by this config, without the leading dot.
    pub extensions: &'static [&'static str],
    /// Comment and string literal rules.
    pub comment_style: CommentStyle,
    /// Ordered list of patterns to try while searching.
    pub patterns: Vec<SymbolPattern>,
}

/// Returns the [`LanguageConfig`] registered for the file extension
/// (e.g. `"py"` → Python). Extensions are matched case-insensitively.
pub fn for_extension(ext: &str) -> Option<&'static LanguageConfig> {
    let ext = ext.to_lowercase();
    configs::ALL_CONFIGS
        .iter()
        .find(|config| config.extensions.contains(&ext.as_str()))
}

/// Splits content into lines after CR-LF normalization.
///
/// A trailing newline yields a trailing empty line, so line numbers stay
/// stable against the untouched original content.
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_extension_known_languages() {
        assert_eq!(for_extension("py").unwrap().name, "Python");
        assert_eq!(for_extension("ts").unwrap().name, "JavaScript/TypeScript");
        assert_eq!(for_extension("rs").unwrap().name, "Rust");
        assert_eq!(for_extension("rb").unwrap().name, "Ruby");
        assert_eq!(for_extension("sql").unwrap().name, "SQL");
    }

    #[test]
    fn test_for_extension_is_case_insensitive() {
        assert_eq!(for_extension("PY").unwrap().name, "Python");
        assert_eq!(for_extension("Cpp").unwrap().name, "C/C++");
    }

    #[test]
    fn test_for_extension_unknown_is_none() {
        assert!(for_extension("xyz").is_none());
        assert!(for_extension("").is_none());
    }

    #[test]
    fn test_split_lines_normalizes_crlf() {
        assert_eq!(split_lines("a\r\nb\r\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_keeps_trailing_empty_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_every_pattern_has_a_capture_group() {
        // Every declaration pattern must capture the identifier it declares.
        for ext in ["py", "js", "rs", "go", "c", "java", "cs", "rb", "lua", "sql"] {
            let config = for_extension(ext).unwrap();
            for pat in &config.patterns {
                assert!(
                    pat.pattern.captures_len() >= 2,
                    "{} pattern {:?} has no capture group",
                    config.name,
                    pat.kind
                );
            }
        }
    }
}
