use super::*;

#[test]
fn mask_strings_basic() {
    assert_eq!(
        mask_strings(r#"const s = "if x > 0";"#),
        r#"const s = "        ";"#
    );
    assert_eq!(
        mask_strings(r#"const c = '{'; if (x) {"#),
        r#"const c = ' '; if (x) {"#
    );
    assert_eq!(
        mask_strings(r#"const s = "he said \"hi\"";"#),
        r#"const s = "              ";"#
    );
}

#[test]
fn mask_strings_template_literal() {
    let masked = mask_strings("const s = `count: ${items.length}`;");
    assert!(!masked.contains("items.length"));
    assert!(!masked.contains('{'));
    assert!(masked.starts_with("const s = `"));
}

#[test]
fn mask_strings_empty() {
    assert_eq!(mask_strings(""), "");
}

#[test]
fn mask_strings_no_strings() {
    assert_eq!(mask_strings("let x = 42;"), "let x = 42;");
}

#[test]
fn mask_strings_unclosed_string() {
    // Unclosed string: mask everything after the quote
    assert_eq!(mask_strings(r#"const s = "hello"#), r#"const s = "     "#);
}

#[test]
fn count_keyword_word_boundaries() {
    assert_eq!(count_keyword("if (x) { notify(); }", "if"), 1);
    assert_eq!(count_keyword("ifdef notify life", "if"), 0);
    assert_eq!(count_keyword("if (a) if (b)", "if"), 2);
}

#[test]
fn count_keyword_multi_word() {
    assert_eq!(count_keyword("} else if (x) {", "else if"), 1);
    assert_eq!(count_keyword("someelse iffy", "else if"), 0);
}

#[test]
fn count_operator_non_overlapping() {
    assert_eq!(count_operator("a && b && c", "&&"), 2);
    assert_eq!(count_operator("a || b", "&&"), 0);
    assert_eq!(count_operator("????", "??"), 2);
}

#[test]
fn read_source_lines_binary_returns_none() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(b"hello\x00world").unwrap();
    tmp.flush().unwrap();

    assert!(read_source_lines(tmp.path()).unwrap().is_none());
}

#[test]
fn read_source_lines_regular_file() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(b"const x = 1;\n// comment\n").unwrap();
    tmp.flush().unwrap();

    let lines = read_source_lines(tmp.path()).unwrap().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "const x = 1;");
}
