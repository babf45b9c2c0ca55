//! Import directive extraction from raw document text.
//!
//! MDX documents carry `import` statements as plain text. This module scans
//! that text for directive-shaped substrings and yields the quoted path each
//! one references, in textual order.
//!
//! # Why a scanner and not one regex
//!
//! A single-line regular expression silently drops multi-line statements like
//!
//! ```text
//! import {
//!     Chart,
//!     Legend,
//! } from "./components/chart";
//! ```
//!
//! so extraction is a small hand-rolled scanner instead: find an `import`
//! keyword at a word boundary, then walk forward (across line breaks) to the
//! next quoted literal. A directive with no literal before the statement
//! clearly ends is malformed and skipped; extraction continues with the next
//! directive.
//!
//! # Extraction rules
//!
//! - Both quote styles (`'` and `"`) are accepted; the literal itself must
//!   not span lines.
//! - Fenced code blocks (``` delimited) are excluded: an import shown inside
//!   a code example is illustration, not a dependency.
//! - Duplicates are returned as-is; the caller deduplicates through its
//!   visited registry.

use tracing::debug;

/// The directive keyword that introduces an import statement.
const DIRECTIVE: &str = "import";

/// How far past the keyword the scanner will look for a quoted literal.
///
/// Real import clauses are short; the bound keeps a stray `import` in prose
/// from swallowing half the document.
const MAX_DIRECTIVE_SPAN: usize = 512;

/// Extract every import-directive path literal from document text.
///
/// Returns the quoted specifiers in textual order. Malformed directives are
/// skipped locally; this function never fails.
///
/// # Examples
///
/// ```rust
/// use resolve_imports::document::extract_import_references;
///
/// let text = r#"
/// import Intro from "./intro";
/// import { Chart } from './components/chart';
///
/// # A post
/// "#;
///
/// let refs = extract_import_references(text);
/// assert_eq!(refs, vec!["./intro", "./components/chart"]);
/// ```
#[must_use]
pub fn extract_import_references(text: &str) -> Vec<String> {
    let text = strip_code_fences(text);
    let bytes = text.as_bytes();
    let mut references = Vec::new();
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(DIRECTIVE) {
        let start = cursor + found;
        let end = start + DIRECTIVE.len();
        if !at_word_boundary(bytes, start, end) {
            cursor = end;
            continue;
        }

        if let Some((literal, consumed)) = scan_quoted_literal(&text[end..]) {
            references.push(literal);
            cursor = end + consumed;
        } else {
            // Malformed or keyword-in-prose; resume after the keyword so a
            // following real directive is still found.
            debug!(offset = start, "no path literal after import directive");
            cursor = end;
        }
    }

    references
}

/// Whether a specifier can name a project-local file.
///
/// URLs, absolute paths, and anchors are external to the project tree and
/// never worth a filesystem search.
#[must_use]
pub fn is_local_reference(specifier: &str) -> bool {
    let trimmed = specifier.trim();

    if trimmed.is_empty() {
        return false;
    }

    // URL schemes (https://, file://, ...)
    if trimmed.contains("://") {
        return false;
    }

    if trimmed.starts_with('/') || trimmed.starts_with('#') {
        return false;
    }

    true
}

/// Scan forward from just past an `import` keyword for a quoted literal.
///
/// Returns the literal and the number of bytes consumed (up to and including
/// the closing quote), or `None` when the statement ends without one. The
/// statement ends at a statement terminator, an inline-code backtick, a blank
/// line, another `import` keyword, or the span bound.
fn scan_quoted_literal(rest: &str) -> Option<(String, usize)> {
    let bytes = rest.as_bytes();
    let mut saw_newline = false;

    for (idx, ch) in rest.char_indices() {
        if idx > MAX_DIRECTIVE_SPAN {
            return None;
        }

        match ch {
            '"' | '\'' => {
                let literal_start = idx + ch.len_utf8();
                let tail = &rest[literal_start..];
                // The path literal itself never spans lines.
                let line_end = tail.find('\n').unwrap_or(tail.len());
                let close = tail[..line_end].find(ch)?;
                let literal = tail[..close].to_string();
                return Some((literal, literal_start + close + ch.len_utf8()));
            }
            ';' | '`' => return None,
            '\n' => {
                if saw_newline {
                    // Blank line: no import statement spans one.
                    return None;
                }
                saw_newline = true;
            }
            c if c.is_whitespace() => {}
            _ => {
                saw_newline = false;
                if rest[idx..].starts_with(DIRECTIVE)
                    && at_word_boundary(bytes, idx, idx + DIRECTIVE.len())
                {
                    return None;
                }
            }
        }
    }

    None
}

/// Check that `bytes[start..end]` is not embedded in a larger identifier.
///
/// Rejects matches like the `import` inside `important` or `reimport`.
fn at_word_boundary(bytes: &[u8], start: usize, end: usize) -> bool {
    let before_ok = start == 0 || !is_ident_byte(bytes[start - 1]);
    let after_ok = end >= bytes.len() || !is_ident_byte(bytes[end]);
    before_ok && after_ok
}

const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Blank out fenced code blocks, preserving line structure.
///
/// Content inside ``` fences is example text; directives there must not be
/// treated as dependencies.
fn strip_code_fences(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_fence = false;

    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
        } else if !in_fence {
            result.push_str(line);
        }
        result.push('\n');
    }

    result
}
