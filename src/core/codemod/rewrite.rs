//! Rewrite engine — turn legacy `params.<field>` reads into an awaited destructuring.
//!
//! Given file content and the detected fields:
//! 1. Builds `const { a, b } = await params`
//! 2. Inserts it as the first statement of the handler's `try` block
//! 3. Replaces every `params.<field>` with the bare field name
//!
//! Everything here is pure; callers decide whether to write the result.

use regex::Regex;
use std::sync::OnceLock;

use super::fields::ParamField;

/// Indentation used when nothing follows `try {` on its own line.
const DEFAULT_INDENT: &str = "    ";

/// Result of rewriting one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// Whether the handler anchor was found and the declaration inserted.
    pub anchor_found: bool,
    /// Number of `params.<field>` expressions replaced.
    pub replacements: usize,
}

/// `export async function NAME(ARGS) { try {`, first match only.
fn anchor_pattern() -> &'static Regex {
    static ANCHOR: OnceLock<Regex> = OnceLock::new();
    ANCHOR.get_or_init(|| {
        Regex::new(r"export async function \w+\([^)]+\) \{\s*try \{")
            .expect("anchor pattern is a valid regex")
    })
}

/// Build the destructuring declaration for the given fields.
///
/// Fields are emitted in the order given; callers pass the detector's output,
/// which is already canonical.
pub fn build_declaration(fields: &[ParamField]) -> String {
    let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
    format!("const {{ {} }} = await params", names.join(", "))
}

/// Insert `declaration` right after the first handler anchor.
///
/// Returns `None` when the anchor does not occur; the content is then left as-is.
pub fn insert_declaration(content: &str, declaration: &str) -> Option<String> {
    let anchor = anchor_pattern().find(content)?;
    let (head, rest) = content.split_at(anchor.end());

    let line_break = if rest.starts_with("\r\n") { "\r\n" } else { "\n" };
    let ends_line = rest.starts_with('\n') || rest.starts_with("\r\n");
    let indent = body_indent(rest).unwrap_or(DEFAULT_INDENT);

    let mut out = String::with_capacity(
        content.len() + 2 * line_break.len() + indent.len() + declaration.len(),
    );
    out.push_str(head);
    out.push_str(line_break);
    out.push_str(indent);
    out.push_str(declaration);
    // Code sharing the `try {` line moves onto its own line after the declaration.
    if !ends_line {
        out.push_str(line_break);
    }
    out.push_str(rest);
    Some(out)
}

/// Indentation of the first non-blank line after the anchor, if the anchor ends its line.
fn body_indent(rest: &str) -> Option<&str> {
    if !rest.starts_with('\n') && !rest.starts_with("\r\n") {
        return None;
    }

    rest.lines()
        .skip(1)
        .find(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start().len()])
}

/// Replace every known `params.<field>` expression with its bare name.
///
/// Returns the new content and the number of replacements made.
pub fn replace_accesses(content: &str) -> (String, usize) {
    let mut out = content.to_string();
    let mut count = 0;

    for field in ParamField::ALL {
        let hits = out.matches(field.access_expr()).count();
        if hits > 0 {
            out = out.replace(field.access_expr(), field.name());
            count += hits;
        }
    }

    (out, count)
}

/// Full rewrite of one file's content for the detected fields.
pub fn rewrite(content: &str, fields: &[ParamField]) -> Rewrite {
    let declaration = build_declaration(fields);

    let (inserted, anchor_found) = match insert_declaration(content, &declaration) {
        Some(updated) => (updated, true),
        None => (content.to_string(), false),
    };

    let (content, replacements) = replace_accesses(&inserted);

    Rewrite {
        content,
        anchor_found,
        replacements,
    }
}
