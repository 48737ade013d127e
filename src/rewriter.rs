//! The empty-span rewrite pass
//!
//! Finds `<span className="...">` elements whose body is nothing but
//! whitespace and collapses each one into the self-closing form
//! `<span className="..." />`. Every other byte of the document passes
//! through unchanged.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Outcome of one rewrite pass over a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The rewritten document text
    pub text: String,
    /// Number of fragments collapsed into the self-closing form
    pub replaced: usize,
}

/// Matches an opening `<span className="...">` tag, a whitespace-only body,
/// and the closing `</span>`. The attribute value (group 1) stops at the
/// first `"`, so a value carrying an escaped quote never matches. Tag name,
/// attribute name, and casing are all literal; a tag with any other
/// attribute is left alone.
fn empty_span_pattern() -> &'static Regex {
    static EMPTY_SPAN: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)] // static pattern, exercised by every test
    EMPTY_SPAN.get_or_init(|| {
        Regex::new(r#"<span className="([^"]*)">\s*</span>"#)
            .expect("empty-span pattern must compile")
    })
}

/// Collapses every whitespace-only span element in `input`, reporting how
/// many fragments were replaced.
///
/// Replacements are non-overlapping and applied left to right in a single
/// pass. Attribute values are carried over verbatim and keep their order of
/// appearance.
pub fn rewrite_counting(input: &str) -> RewriteOutcome {
    let mut replaced = 0;
    let text = empty_span_pattern()
        .replace_all(input, |caps: &Captures<'_>| {
            replaced += 1;
            let class = caps.get(1).map_or("", |m| m.as_str());
            format!("<span className=\"{}\" />", class)
        })
        .into_owned();

    RewriteOutcome { text, replaced }
}

/// Pure text-to-text form of the rewrite pass.
///
/// A document with no matching fragment comes back unchanged. The pass is
/// idempotent: the self-closing form no longer matches the pattern.
pub fn rewrite(input: &str) -> String {
    rewrite_counting(input).text
}
