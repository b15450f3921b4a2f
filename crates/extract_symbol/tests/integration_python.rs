// Integration tests: indentation-delimited extraction (Python).

use extract_symbol::extract_symbol;
use lang_support::for_extension;

const SOURCE: &str = r#"import os


@dataclass
class Config:
    """Runtime options."""

    path: str = "."

    def resolve(self):
        # comments inside the block stay put
        return os.path.abspath(self.path)


def main():
    cfg = Config()

    print(cfg.resolve())


MARKER = "def not_a_function():"
"#;

fn extract(name: &str) -> Vec<String> {
    extract_symbol(SOURCE, name, for_extension("py").unwrap()).unwrap()
}

fn leading_ws(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[test]
fn test_class_block_spans_to_dedent() {
    let block = extract("Config");
    // Decorator included, block ends before the top-level `def main`.
    assert_eq!(block[0], "@dataclass");
    assert_eq!(block[1], "class Config:");
    assert!(block.last().unwrap().contains("os.path.abspath"));
    assert!(!block.iter().any(|l| l.contains("def main")));
}

#[test]
fn test_inner_lines_are_indented_deeper_than_declaration() {
    let block = extract("main");
    assert_eq!(block[0], "def main():");
    let baseline = leading_ws(&block[0]);
    for line in &block[1..] {
        if !line.trim().is_empty() {
            assert!(leading_ws(line) > baseline, "line {line:?} not indented");
        }
    }
}

#[test]
fn test_blank_lines_do_not_terminate_block() {
    // `main` has a blank line between its statements.
    let block = extract("main");
    assert!(block.iter().any(|l| l.contains("cfg = Config()")));
    assert!(block.iter().any(|l| l.contains("print(cfg.resolve())")));
}

#[test]
fn test_nested_method_via_dot_notation() {
    let block = extract("Config.resolve");
    assert_eq!(block[0].trim_start(), "def resolve(self):");
    assert_eq!(block.len(), 3);
}

#[test]
fn test_declaration_inside_string_is_not_matched() {
    // The only `not_a_function` occurrence lives inside a string literal.
    let config = for_extension("py").unwrap();
    assert!(extract_symbol(SOURCE, "not_a_function", config).is_err());
}

#[test]
fn test_line_following_block_is_shallower() {
    // The indent property from the other side: the source line right
    // after the returned block dedents to the baseline or less.
    let block = extract("Config");
    let lines: Vec<&str> = SOURCE.split('\n').collect();
    let last_in_block = block.last().unwrap();
    let idx = lines.iter().position(|l| l == last_in_block).unwrap();
    let next_nonblank = lines[idx + 1..]
        .iter()
        .find(|l| !l.trim().is_empty())
        .unwrap();
    assert!(leading_ws(next_nonblank) <= leading_ws(&block[1]));
}
