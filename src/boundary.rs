//! Function and class boundary detection.
//!
//! Locates declarations by matching header shapes on code lines, then
//! finds each block's end by counting brace depth forward from the
//! declaration. This is an explicit heuristic layer, not a parser: it
//! works on arbitrary (possibly malformed) source text, and its observable
//! start/end lines are pinned by tests as a compatibility contract.
//!
//! Known limitations:
//! - An expression-bodied arrow function has no braces of its own, so its
//!   end line is resolved by the first brace pair found further down (or
//!   the last line of the file).
//! - Function expressions assigned without an arrow
//!   (`const f = function () {…}`) are not detected.
//! - A call statement written without a semicolon can be mistaken for a
//!   method-shaped declaration.

use serde::Serialize;

use crate::lines::LineKind;
use crate::util::{contains_keyword, mask_strings};

/// Declaration shapes the extractor can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    ArrowFunction,
    Function,
    Method,
    Class,
}

/// A detected declaration with its 1-based line range.
#[derive(Debug, Clone, Serialize)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclKind,
    pub start_line: usize,
    pub end_line: usize,
}

/// Keywords that must not be mistaken for a method name.
const CONTROL_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "return", "else", "do", "case", "new", "typeof",
    "await", "yield", "throw", "delete", "void", "in", "of",
];

/// Modifiers that may precede a method-shaped declaration.
const METHOD_MODIFIERS: &[&str] = &[
    "public", "private", "protected", "static", "async", "get", "set", "readonly", "override",
    "abstract",
];

/// Modifiers that may precede a top-level declaration.
const TOP_LEVEL_MODIFIERS: &[&str] = &["export", "default", "declare"];

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Take a leading identifier; returns the identifier and the rest.
fn take_identifier(s: &str) -> (&str, &str) {
    let end = s.find(|c| !is_ident_char(c)).unwrap_or(s.len());
    (&s[..end], &s[end..])
}

/// Strip any number of leading whole-word modifiers from the list.
fn strip_modifiers<'a>(mut s: &'a str, modifiers: &[&str]) -> &'a str {
    loop {
        let trimmed = s.trim_start();
        let (word, rest) = take_identifier(trimmed);
        if !word.is_empty() && modifiers.contains(&word) {
            s = rest;
        } else {
            return trimmed;
        }
    }
}

/// `const name = (…) =>` / `let name = async x =>`
fn match_arrow_function(masked: &str) -> Option<String> {
    let s = strip_modifiers(masked, TOP_LEVEL_MODIFIERS);
    let (declarator, rest) = take_identifier(s);
    if !matches!(declarator, "const" | "let" | "var") {
        return None;
    }
    let (name, rest) = take_identifier(rest.trim_start());
    if name.is_empty() || !rest.trim_start().starts_with('=') {
        return None;
    }
    if !rest.contains("=>") {
        return None;
    }
    Some(name.to_string())
}

/// `function name(…)` / `export async function name(…)`
fn match_function_declaration(masked: &str) -> Option<String> {
    if !contains_keyword(masked, "function") {
        return None;
    }
    let pos = masked.find("function")?;
    let after = masked[pos + "function".len()..]
        .trim_start()
        .trim_start_matches('*')
        .trim_start();
    let (name, rest) = take_identifier(after);
    if name.is_empty() || !rest.trim_start().starts_with('(') {
        return None;
    }
    Some(name.to_string())
}

/// `[modifiers] name(params) {`: the method shape used both at class
/// scope and for free-standing declarations.
fn match_method(masked: &str) -> Option<String> {
    if contains_keyword(masked, "function") {
        return None; // already covered by the function pattern
    }
    let s = strip_modifiers(masked, METHOD_MODIFIERS);
    let (name, rest) = take_identifier(s);
    if name.is_empty() || CONTROL_KEYWORDS.contains(&name) {
        return None;
    }
    if !rest.trim_start().starts_with('(') {
        return None;
    }
    // Declaration headers end at an open brace or an unfinished signature,
    // never at a statement terminator.
    let end = masked.trim_end();
    if end.ends_with(';') {
        return None;
    }
    if end.ends_with('{') || end.ends_with('(') || end.ends_with(',') || end.ends_with(')') {
        Some(name.to_string())
    } else {
        None
    }
}

/// `class Name` / `export abstract class Name extends Base {`
fn match_class(masked: &str) -> Option<String> {
    let s = strip_modifiers(masked, TOP_LEVEL_MODIFIERS);
    let (word, rest) = take_identifier(s);
    let rest = if word == "abstract" { rest.trim_start() } else { s };
    let (keyword, rest) = take_identifier(rest);
    if keyword != "class" {
        return None;
    }
    let (name, _) = take_identifier(rest.trim_start());
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Find the end of the block starting at `start_line` (1-based).
///
/// Counts `{` as +1 and `}` as -1 over masked code lines, starting only
/// once the first `{` is seen; the end is the first line where depth
/// returns to zero. Without a closing brace the end defaults to the
/// last line.
pub fn find_block_end(lines: &[String], kinds: &[LineKind], start_line: usize) -> usize {
    let mut depth: isize = 0;
    let mut found_open = false;

    for (idx, line) in lines.iter().enumerate().skip(start_line - 1) {
        if kinds.get(idx) != Some(&LineKind::Code) {
            continue;
        }
        let masked = mask_strings(line);
        for ch in masked.bytes() {
            if ch == b'{' {
                depth += 1;
                found_open = true;
            } else if ch == b'}' {
                depth -= 1;
            }
        }
        if found_open && depth <= 0 {
            return idx + 1;
        }
    }

    lines.len()
}

/// Run one header matcher over every code line.
fn scan(
    lines: &[String],
    kinds: &[LineKind],
    kind: DeclKind,
    matcher: impl Fn(&str) -> Option<String>,
    out: &mut Vec<Declaration>,
) {
    for (idx, line) in lines.iter().enumerate() {
        if kinds.get(idx) != Some(&LineKind::Code) {
            continue;
        }
        let masked = mask_strings(line.trim());
        if let Some(name) = matcher(&masked) {
            let start_line = idx + 1;
            out.push(Declaration {
                name,
                kind,
                start_line,
                end_line: find_block_end(lines, kinds, start_line),
            });
        }
    }
}

/// Deduplicate by `(name, start_line)`, keeping the first occurrence,
/// then order by position.
fn dedup_declarations(mut decls: Vec<Declaration>) -> Vec<Declaration> {
    let mut seen: Vec<(String, usize)> = Vec::new();
    decls.retain(|d| {
        let key = (d.name.clone(), d.start_line);
        if seen.contains(&key) {
            false
        } else {
            seen.push(key);
            true
        }
    });
    decls.sort_by_key(|d| d.start_line);
    decls
}

/// Detect function-shaped declarations: arrow assignments, named
/// function declarations, and method-shaped headers.
pub fn find_functions(lines: &[String], kinds: &[LineKind]) -> Vec<Declaration> {
    let mut decls = Vec::new();
    scan(lines, kinds, DeclKind::ArrowFunction, match_arrow_function, &mut decls);
    scan(lines, kinds, DeclKind::Function, match_function_declaration, &mut decls);
    scan(lines, kinds, DeclKind::Method, match_method, &mut decls);
    dedup_declarations(decls)
}

/// Detect class declarations.
pub fn find_classes(lines: &[String], kinds: &[LineKind]) -> Vec<Declaration> {
    let mut decls = Vec::new();
    scan(lines, kinds, DeclKind::Class, match_class, &mut decls);
    dedup_declarations(decls)
}

/// Detect method-shaped declarations within a line range (used for class
/// bodies). Line numbers in the result are file-relative and 1-based.
pub fn find_methods_in_range(
    lines: &[String],
    kinds: &[LineKind],
    start_line: usize,
    end_line: usize,
) -> Vec<Declaration> {
    let mut decls = Vec::new();
    for idx in start_line..end_line.min(lines.len()) {
        if kinds.get(idx) != Some(&LineKind::Code) {
            continue;
        }
        let masked = mask_strings(lines[idx].trim());
        if let Some(name) = match_method(&masked) {
            let method_start = idx + 1;
            decls.push(Declaration {
                name,
                kind: DeclKind::Method,
                start_line: method_start,
                end_line: find_block_end(lines, kinds, method_start),
            });
        }
    }
    dedup_declarations(decls)
}

#[cfg(test)]
#[path = "boundary_test.rs"]
mod tests;
