use std::path::PathBuf;

use super::*;

fn source(name: &str, text: &str) -> SourceLines {
    let raw: Vec<String> = text.lines().map(String::from).collect();
    SourceLines::new(PathBuf::from(name), &raw)
}

/// A block of `n` distinct lines, each long enough to anchor a match.
fn block(tag: &str, n: usize) -> String {
    (0..n)
        .map(|i| format!("shared_{tag}_statement_{i}();"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Filler lines that never match anything else.
fn filler(tag: &str, n: usize) -> String {
    (0..n)
        .map(|i| format!("only_in_{tag}_number_{i}();"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn identical_block_reported_once() {
    let shared = block("x", 12);
    let a = source("a.ts", &format!("{}\n{}\n", filler("a", 4), shared));
    let b = source("b.ts", &format!("{}\n{}\n", shared, filler("b", 4)));

    let blocks = detect_duplicates(&[a, b], 10);
    assert_eq!(blocks.len(), 1);

    let d = &blocks[0];
    assert_eq!(d.line_count, 12);
    assert_eq!(d.similarity, 100);
    assert_eq!(d.first.start_line, 5);
    assert_eq!(d.first.end_line, 16);
    assert_eq!(d.second.start_line, 1);
    assert_eq!(d.second.end_line, 12);
    assert!(d.token_count > 0);
}

#[test]
fn below_minimum_not_reported() {
    let shared = block("x", 9);
    let a = source("a.ts", &format!("{}\n{}\n", shared, filler("a", 3)));
    let b = source("b.ts", &format!("{}\n{}\n", filler("b", 3), shared));

    assert!(detect_duplicates(&[a, b], 10).is_empty());
}

#[test]
fn duplicate_within_one_file() {
    let shared = block("x", 10);
    let text = format!("{}\n{}\n{}\n", shared, filler("gap", 5), shared);
    let a = source("a.ts", &text);

    let blocks = detect_duplicates(&[a], 10);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].first.start_line, 1);
    assert_eq!(blocks[0].second.start_line, 16);
}

#[test]
fn self_comparison_does_not_match_itself() {
    let a = source("a.ts", &block("x", 15));
    assert!(detect_duplicates(&[a], 10).is_empty());
}

#[test]
fn short_anchor_lines_are_skipped() {
    // every line is under the 10-char anchor minimum
    let text = "a();\nb();\nc();\nd();\ne();\nf();\ng();\nh();\ni();\nj();\n";
    let a = source("a.ts", text);
    let b = source("b.ts", text);

    assert!(detect_duplicates(&[a, b], 10).is_empty());
}

#[test]
fn three_copies_report_each_pairing() {
    let shared = block("x", 10);
    let a = source("a.ts", &shared);
    let b = source("b.ts", &shared);
    let c = source("c.ts", &shared);

    // a-b, a-c, b-c
    let blocks = detect_duplicates(&[a, b, c], 10);
    assert_eq!(blocks.len(), 3);
}

#[test]
fn lines_are_trimmed_before_comparison() {
    let shared = block("x", 10);
    let indented: String = shared.lines().map(|l| format!("    {l}\n")).collect();
    let a = source("a.ts", &shared);
    let b = source("b.ts", &indented);

    let blocks = detect_duplicates(&[a, b], 10);
    assert_eq!(blocks.len(), 1);
}

#[test]
fn snippet_is_bounded() {
    let shared = block("a_rather_long_tag_to_stretch_the_lines", 30);
    let a = source("a.ts", &shared);
    let b = source("b.ts", &shared);

    let blocks = detect_duplicates(&[a, b], 10);
    let snippet = &blocks[0].snippet;
    assert!(snippet.lines().count() <= 5);
    assert!(snippet.chars().count() <= 240);
}

#[test]
fn no_files_no_blocks() {
    assert!(detect_duplicates(&[], 10).is_empty());
}

#[test]
fn sorted_largest_first() {
    let big = block("big", 14);
    let small = block("small", 10);
    let a = source("a.ts", &format!("{}\n{}\n{}\n", small, filler("a", 3), big));
    let b = source("b.ts", &format!("{}\n{}\n{}\n", big, filler("b", 3), small));

    let blocks = detect_duplicates(&[a, b], 10);
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].line_count >= blocks[1].line_count);
}
