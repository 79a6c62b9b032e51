// crates/engine/src/classify.rs
//! Per-line classifiers.
//!
//! Both classifiers are textual heuristics, not parsers: they judge a single
//! line in isolation and carry no state across lines. A declaration header
//! split over several lines is never matched, and a matching substring inside
//! a string literal or comment is.

/// A verdict on a single line of source text.
pub trait LineClassifier: Send + Sync {
    /// Return `true` when the line matches this classifier's pattern.
    fn matches(&self, line: &str) -> bool;
}

/// Flags lines that look like top-level contract or library declarations.
///
/// A line qualifies when it mentions `contract` or `library`, opens a block
/// with `{` on the same line, and does not mention `function`. The last guard
/// keeps function signatures out even when they reuse the keywords.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclarationClassifier;

impl LineClassifier for DeclarationClassifier {
    fn matches(&self, line: &str) -> bool {
        (line.contains("contract") || line.contains("library"))
            && line.contains('{')
            && !line.contains("function")
    }
}

/// Flags lines whose first token is a loop keyword.
///
/// Tab characters are stripped before tokenizing, and the token is cut at the
/// first `(` so that `for(i = 0; ...` still matches.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoopClassifier;

impl LineClassifier for LoopClassifier {
    fn matches(&self, line: &str) -> bool {
        let stripped = line.replace('\t', "");
        let Some(token) = stripped.split_whitespace().next() else {
            return false;
        };
        let head = token.split('(').next().unwrap_or_default();
        matches!(head, "for" | "while")
    }
}
