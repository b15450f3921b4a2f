// crates/extract_errors/src/lib.rs

//! The shared failure type for the extraction crates.
//!
//! Every extractor surfaces exactly one of these three kinds. At the
//! boundary they all mean the same thing — "no lines for you" — but the
//! variant is kept so callers can log *why* a directive produced nothing.

use thiserror::Error;

/// Why an extraction returned no lines.
///
/// A failed extraction is deterministic: the same `(content, selector)`
/// pair fails identically on every call, so callers should report, not
/// retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The selector string does not match its grammar at all
    /// (e.g. `"3..x"` as a line range).
    #[error("invalid selector syntax: {0}")]
    InvalidSelector(String),

    /// The selector is well-formed but matches nothing in the given
    /// content: out-of-bounds range, absent or unterminated region,
    /// absent symbol, or a symbol block that never closes.
    #[error("selector did not resolve: {0}")]
    Unresolved(String),

    /// No language configuration is registered for the file extension.
    #[error("unsupported language extension: {0:?}")]
    UnsupportedLanguage(String),
}
