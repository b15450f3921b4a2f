//! `snippet_extractor` — the one crate callers depend on.
//!
//! Re-exports the extraction operations (line ranges, named regions,
//! code symbols, comment filtering) and adds `*_from_file` convenience
//! wrappers. The wrappers are the only place in the workspace that
//! touches the filesystem; everything underneath is a pure function over
//! already-loaded text.

use std::path::Path;

use anyhow::{Context, Result};

pub use extract_errors::ExtractError;
pub use extract_line_range::{extract_line_range, is_valid_line_range};
pub use extract_region::{
    extract_region, extract_region_with_markers, DEFAULT_REGION_END, DEFAULT_REGION_START,
};
pub use extract_symbol::extract_symbol;
pub use filter_comments::filter_comments;
pub use lang_support::{
    for_extension, BlockStrategy, CommentStyle, LanguageConfig, ScanState, SymbolPattern,
};

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Error reading file {}", path.display()))
}

fn extension_of(path: &Path) -> &str {
    path.extension().and_then(|ext| ext.to_str()).unwrap_or("")
}

/// Reads `path` and extracts the named symbol, selecting the language
/// configuration from the file extension.
///
/// # Errors
///
/// I/O failures carry the path as context; an unregistered extension
/// surfaces as [`ExtractError::UnsupportedLanguage`]; a symbol that does
/// not resolve surfaces as [`ExtractError::Unresolved`].
pub fn extract_symbol_from_file<P: AsRef<Path>>(path: P, symbol_name: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    let ext = extension_of(path);
    let config = for_extension(ext)
        .ok_or_else(|| ExtractError::UnsupportedLanguage(ext.to_string()))
        .with_context(|| format!("cannot extract symbols from {}", path.display()))?;
    let content = read_file(path)?;
    Ok(extract_symbol(&content, symbol_name, config)?)
}

/// Reads `path` and extracts the named marker-delimited region.
pub fn extract_region_from_file<P: AsRef<Path>>(path: P, region_name: &str) -> Result<Vec<String>> {
    let content = read_file(path.as_ref())?;
    Ok(extract_region(&content, region_name)?)
}

/// Reads `path` and extracts the lines selected by `expression`.
pub fn extract_line_range_from_file<P: AsRef<Path>>(
    path: P,
    expression: &str,
) -> Result<Vec<String>> {
    let content = read_file(path.as_ref())?;
    Ok(extract_line_range(&content, expression)?)
}
