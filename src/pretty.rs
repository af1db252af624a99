//! Line-oriented re-layout of compact documents produced by
//! [`Query::render`](crate::Query::render).
//!
//! The input is re-split on brace boundaries, re-indented by nesting depth
//! (tabs internally, converted to spaces at the end), and multi-field lines
//! are exploded one field per line. This is a re-parse of the builder's own
//! compact form, not a general GraphQL formatter: string literals that
//! contain braces will confuse it, so it must not be run over arbitrary
//! third-party documents.

use regex::Regex;
use std::sync::LazyLock;

/// An indented line of bare field tokens, with an optional attached `{`.
static FIELD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\t+)((?:[\w-]+ ?)+)(\{)?$").unwrap());

/// A `(` glued to whatever precedes it.
static GLUED_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\s(])\(").unwrap());

pub(crate) fn prettify(query: &str, line_indent: usize) -> String {
    log::debug!(
        "pretty-printing {} bytes at {} spaces per level",
        query.len(),
        line_indent,
    );

    let lines = split_on_brackets(query);
    let lines = indent_lines(lines);
    let lines = rewrap_fields(lines);

    let joined = lines
        .join("\n")
        .replace('\t', &" ".repeat(line_indent))
        .replace(":  {", ": {");
    GLUED_PAREN.replace_all(&joined, "$1 (").into_owned()
}

/// Break the document on brace boundaries, one brace per line end, then
/// merge back together the lines that a parenthesized argument list spans:
/// a brace belongs on the same line as a still-open `(` before it, and a
/// continuation line closes over an unclosed `(` on a brace-bearing line.
fn split_on_brackets(query: &str) -> Vec<String> {
    let broken = query.replace('{', " {\n").replace('}', "\n}\n");

    let mut lines: Vec<String> = Vec::new();
    for raw_line in broken.split('\n') {
        let line = normalize_line(raw_line);
        if line.is_empty() {
            continue;
        }

        if let Some(previous) = lines.last() {
            let unclosed = previous.contains('(') && !previous.contains(')');
            if unclosed && (line.contains('{') || previous.contains('{')) {
                if let Some(previous) = lines.pop() {
                    lines.push(format!("{previous}{line}"));
                }
                continue;
            }
        }
        lines.push(line);
    }
    lines
}

/// Trim the line and collapse any whitespace run before a trailing `{`
/// down to a single space. Re-running the printer over its own output
/// relies on this normalization.
fn normalize_line(line: &str) -> String {
    let trimmed = line.trim();
    match trimmed.strip_suffix('{') {
        Some(head) if !head.trim_end().is_empty() => {
            format!("{} {{", head.trim_end())
        },
        _ => trimmed.to_string(),
    }
}

fn indent_lines(lines: Vec<String>) -> Vec<String> {
    let mut level: usize = 0;
    let mut indented = Vec::with_capacity(lines.len());
    for line in lines {
        if line.ends_with('{') {
            indented.push(format!("{}{}", "\t".repeat(level), line));
            level += 1;
        } else if line.ends_with('}') {
            level = level.saturating_sub(1);
            indented.push(format!("{}{}", "\t".repeat(level), line));
        } else {
            indented.push(format!("{}{}", "\t".repeat(level), line));
        }
    }
    indented
}

/// Explode indented multi-field lines into one field per line. An attached
/// `{` stays glued to the last field's own line.
fn rewrap_fields(lines: Vec<String>) -> Vec<String> {
    let mut reformatted = Vec::with_capacity(lines.len());
    for line in lines {
        let Some(captures) = FIELD_LINE.captures(&line) else {
            reformatted.push(line);
            continue;
        };

        let indent = &captures[1];
        let attached_brace = captures.get(3).is_some();
        let tokens: Vec<&str> = captures[2].trim_end().split(' ').collect();

        for (i, token) in tokens.iter().enumerate() {
            if attached_brace && i == tokens.len() - 1 {
                reformatted.push(format!("{indent}{token} {{"));
            } else {
                reformatted.push(format!("{indent}{token}"));
            }
        }
    }
    reformatted
}
