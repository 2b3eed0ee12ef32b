use crate::types::RefToken;

/// The result of parsing a rule string.
///
/// `segments.len() == tokens.len() + 1` always holds; segment `i` is the
/// literal operator text preceding token `i`, with one trailing segment.
#[derive(Debug)]
pub(crate) struct ParsedRule {
    pub(crate) tokens: Vec<RefToken>,
    pub(crate) segments: Vec<String>,
}
