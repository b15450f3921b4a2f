// Integration tests: brace-delimited extraction (JavaScript/TypeScript).

use extract_symbol::extract_symbol;
use lang_support::{for_extension, scan_line, CommentStyle, ScanState};

const SOURCE: &str = r#"import { api } from "./api";

export class Store {
    constructor() {
        this.items = new Map();
    }

    add(key, value) {
        // brace in a comment: }
        this.items.set(key, value);
    }
}

export async function sync(store) {
    const payload = "{not: 'code'}";
    if (store.size > 0) {
        await api.push(payload);
    }
    return true;
}

const defaults = {
    retries: 3,
    backoff: { base: 100 },
};
"#;

fn extract(name: &str) -> Vec<String> {
    extract_symbol(SOURCE, name, for_extension("js").unwrap()).unwrap()
}

/// Counts braces the way the extractor sees them: outside strings and
/// comments.
fn code_brace_balance(lines: &[String]) -> (usize, usize) {
    let style = CommentStyle {
        line_comment: Some("//"),
        block_comment_start: Some("/*"),
        block_comment_end: Some("*/"),
        string_delimiters: &['"', '\'', '`'],
        triple_quote: false,
    };
    let mut state = ScanState::default();
    let mut opens = 0;
    let mut closes = 0;
    for line in lines {
        for ch in scan_line(line, &mut state, &style).chars() {
            match ch {
                '{' => opens += 1,
                '}' => closes += 1,
                _ => {}
            }
        }
    }
    (opens, closes)
}

#[test]
fn test_class_block_is_brace_balanced() {
    let block = extract("Store");
    assert_eq!(block[0], "export class Store {");
    assert_eq!(block.last().unwrap(), "}");
    let (opens, closes) = code_brace_balance(&block);
    assert_eq!(opens, closes);
}

#[test]
fn test_function_block_ignores_braces_in_strings() {
    let block = extract("sync");
    // The payload string holds an unbalanced "{"; it must not shift the
    // block end.
    assert_eq!(block.last().unwrap(), "}");
    assert!(block.iter().any(|l| l.contains("await api.push")));
    let (opens, closes) = code_brace_balance(&block);
    assert_eq!(opens, closes);
}

#[test]
fn test_method_via_dot_notation() {
    let block = extract("Store.add");
    assert_eq!(block[0].trim_start(), "add(key, value) {");
    assert_eq!(block.last().unwrap().trim(), "}");
    assert!(block.iter().any(|l| l.contains("items.set")));
}

#[test]
fn test_const_object_literal() {
    let block = extract("defaults");
    assert_eq!(block.len(), 4);
    assert!(block[0].starts_with("const defaults"));
    assert_eq!(block.last().unwrap(), "};");
}

#[test]
fn test_unknown_symbol_is_err() {
    let config = for_extension("js").unwrap();
    assert!(extract_symbol(SOURCE, "nothing", config).is_err());
}
