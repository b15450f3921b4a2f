// crates/lang_support/src/configs.rs

//! The language registry.
//!
//! One [`LanguageConfig`] row per language. Every declaration pattern
//! captures the declared identifier in its first group; the extractor
//! compares that capture against the requested symbol name.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{BlockStrategy, CommentStyle, LanguageConfig, SymbolPattern};

const C_COMMENTS: CommentStyle = CommentStyle {
    line_comment: Some("//"),
    block_comment_start: Some("/*"),
    block_comment_end: Some("*/"),
    string_delimiters: &['"', '\''],
    triple_quote: false,
};

fn pattern(kind: &'static str, re: &str, strategy: BlockStrategy) -> SymbolPattern {
    SymbolPattern {
        kind,
        pattern: Regex::new(re).unwrap(),
        strategy,
    }
}

const RUBY_OPENERS: &[&str] = &[
    "def", "class", "module", "if", "unless", "while", "until", "case", "begin", "do", "for",
];

const LUA_OPENERS: &[&str] = &["function", "if", "while", "for", "do"];

pub(crate) static ALL_CONFIGS: Lazy<Vec<LanguageConfig>> = Lazy::new(|| {
    vec![
        LanguageConfig {
            name: "Python",
            extensions: &["py", "pyw"],
            comment_style: CommentStyle {
                line_comment: Some("#"),
                block_comment_start: None,
                block_comment_end: None,
                string_delimiters: &['"', '\''],
                triple_quote: true,
            },
            patterns: vec![
                pattern(
                    "class",
                    r"^\s*class\s+([A-Za-z_]\w*)\s*[(:]",
                    BlockStrategy::Indent,
                ),
                pattern(
                    "function",
                    r"^\s*(?:async\s+)?def\s+([A-Za-z_]\w*)\s*\(",
                    BlockStrategy::Indent,
                ),
            ],
        },
        LanguageConfig {
            name: "JavaScript/TypeScript",
            extensions: &["js", "ts", "jsx", "tsx", "mjs", "cjs"],
            comment_style: CommentStyle {
                line_comment: Some("//"),
                block_comment_start: Some("/*"),
                block_comment_end: Some("*/"),
                string_delimiters: &['"', '\'', '`'],
                triple_quote: false,
            },
            patterns: vec![
                pattern(
                    "class",
                    r"^\s*(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+([A-Za-z_$][\w$]*)",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "function",
                    r"^\s*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*([A-Za-z_$][\w$]*)\s*[(<]",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "const/let/var",
                    r"^\s*(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*=",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "method",
                    r"^\s*(?:static\s+)?(?:async\s+)?(?:get\s+|set\s+)?([A-Za-z_$][\w$]*)\s*\([^)]*\)\s*\{",
                    BlockStrategy::Brace,
                ),
            ],
        },
        LanguageConfig {
            name: "Rust",
            // '\'' is deliberately not a string delimiter: lifetimes
            // (`&'a str`) would otherwise open a never-closed "string".
            extensions: &["rs"],
            comment_style: CommentStyle {
                line_comment: Some("//"),
                block_comment_start: Some("/*"),
                block_comment_end: Some("*/"),
                string_delimiters: &['"'],
                triple_quote: false,
            },
            patterns: vec![
                pattern(
                    "struct",
                    r"^\s*(?:pub(?:\([^)]*\))?\s+)?struct\s+([A-Za-z_]\w*)",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "enum",
                    r"^\s*(?:pub(?:\([^)]*\))?\s+)?enum\s+([A-Za-z_]\w*)",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "trait",
                    r"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:unsafe\s+)?trait\s+([A-Za-z_]\w*)",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "impl",
                    r"^\s*impl(?:<[^>]*>)?\s+([A-Za-z_]\w*)",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "function",
                    r"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:const\s+)?(?:async\s+)?(?:unsafe\s+)?fn\s+([A-Za-z_]\w*)",
                    BlockStrategy::Brace,
                ),
            ],
        },
        LanguageConfig {
            name: "Go",
            extensions: &["go"],
            comment_style: CommentStyle {
                line_comment: Some("//"),
                block_comment_start: Some("/*"),
                block_comment_end: Some("*/"),
                string_delimiters: &['"', '`'],
                triple_quote: false,
            },
            patterns: vec![
                pattern(
                    "function",
                    r"^\s*func\s+(?:\([^)]*\)\s*)?([A-Za-z_]\w*)\s*\(",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "struct",
                    r"^\s*type\s+([A-Za-z_]\w*)\s+struct\b",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "interface",
                    r"^\s*type\s+([A-Za-z_]\w*)\s+interface\b",
                    BlockStrategy::Brace,
                ),
            ],
        },
        LanguageConfig {
            name: "C/C++",
            extensions: &["c", "cpp", "h", "hpp", "cc", "cxx"],
            comment_style: C_COMMENTS,
            patterns: vec![
                pattern("class", r"^\s*class\s+([A-Za-z_]\w*)", BlockStrategy::Brace),
                pattern(
                    "struct",
                    r"^\s*(?:typedef\s+)?struct\s+([A-Za-z_]\w*)",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "enum",
                    r"^\s*(?:typedef\s+)?enum\s+(?:class\s+)?([A-Za-z_]\w*)",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "function",
                    r"^\s*\S+[\s*]+(?:\w+::)*([A-Za-z_]\w*)\s*\(",
                    BlockStrategy::Brace,
                ),
            ],
        },
        LanguageConfig {
            name: "Java",
            extensions: &["java"],
            comment_style: C_COMMENTS,
            patterns: vec![
                pattern(
                    "class",
                    r"^\s*(?:public\s+|private\s+|protected\s+)?(?:static\s+)?(?:abstract\s+)?(?:final\s+)?class\s+([A-Za-z_]\w*)",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "interface",
                    r"^\s*(?:public\s+|private\s+|protected\s+)?interface\s+([A-Za-z_]\w*)",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "enum",
                    r"^\s*(?:public\s+|private\s+|protected\s+)?enum\s+([A-Za-z_]\w*)",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "method",
                    r"^\s*(?:public\s+|private\s+|protected\s+)?(?:static\s+)?(?:abstract\s+)?(?:final\s+)?\S+\s+([A-Za-z_]\w*)\s*\(",
                    BlockStrategy::Brace,
                ),
            ],
        },
        LanguageConfig {
            name: "C#",
            extensions: &["cs"],
            comment_style: C_COMMENTS,
            patterns: vec![
                pattern(
                    "class",
                    r"^\s*(?:public\s+|private\s+|protected\s+|internal\s+)?(?:static\s+)?(?:abstract\s+)?(?:partial\s+)?class\s+([A-Za-z_]\w*)",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "interface",
                    r"^\s*(?:public\s+|private\s+|protected\s+|internal\s+)?interface\s+([A-Za-z_]\w*)",
                    BlockStrategy::Brace,
                ),
                pattern(
                    "method",
                    r"^\s*(?:public\s+|private\s+|protected\s+|internal\s+)?(?:static\s+)?(?:abstract\s+)?(?:virtual\s+)?(?:override\s+)?(?:async\s+)?\S+\s+([A-Za-z_]\w*)\s*[(<]",
                    BlockStrategy::Brace,
                ),
            ],
        },
        LanguageConfig {
            name: "Ruby",
            extensions: &["rb"],
            comment_style: CommentStyle {
                line_comment: Some("#"),
                block_comment_start: None,
                block_comment_end: None,
                string_delimiters: &['"', '\''],
                triple_quote: false,
            },
            patterns: vec![
                pattern(
                    "class",
                    r"^\s*class\s+([A-Z]\w*)",
                    BlockStrategy::Keyword {
                        openers: RUBY_OPENERS,
                        terminator: "end",
                    },
                ),
                pattern(
                    "module",
                    r"^\s*module\s+([A-Z]\w*)",
                    BlockStrategy::Keyword {
                        openers: RUBY_OPENERS,
                        terminator: "end",
                    },
                ),
                pattern(
                    "method",
                    r"^\s*def\s+(?:self\.)?([a-z_]\w*[?!=]?)",
                    BlockStrategy::Keyword {
                        openers: RUBY_OPENERS,
                        terminator: "end",
                    },
                ),
            ],
        },
        LanguageConfig {
            name: "Lua",
            extensions: &["lua"],
            comment_style: CommentStyle {
                line_comment: Some("--"),
                block_comment_start: None,
                block_comment_end: None,
                string_delimiters: &['"', '\''],
                triple_quote: false,
            },
            patterns: vec![pattern(
                "function",
                r"^\s*(?:local\s+)?function\s+(?:[\w.]+[.:])?([A-Za-z_]\w*)\s*\(",
                BlockStrategy::Keyword {
                    openers: LUA_OPENERS,
                    terminator: "end",
                },
            )],
        },
        LanguageConfig {
            name: "SQL",
            extensions: &["sql"],
            comment_style: CommentStyle {
                line_comment: Some("--"),
                block_comment_start: Some("/*"),
                block_comment_end: Some("*/"),
                string_delimiters: &['\''],
                triple_quote: false,
            },
            patterns: vec![pattern(
                "cte",
                r"(?i)(?:^|,)\s*(?:with\s+)?([A-Za-z_]\w*)\s+as\s*\(",
                BlockStrategy::Paren,
            )],
        },
    ]
});
