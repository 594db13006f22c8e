//! Tokens produced by the journal lexer.

use serde::Serialize;

/// The syntactic role of a token within a journal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// The leading marker character (`@`, `!`, `-`, ...).
    Bullet,
    /// The bracketed clause following the bullet, without brackets.
    Annotation,
    /// The free text of the entry.
    Text,
    /// A `#`-prefixed trailing label, without the `#`.
    Tag,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Bullet => "bullet",
            Self::Annotation => "annotation",
            Self::Text => "text",
            Self::Tag => "tag",
        })
    }
}

/// A single token: its kind and the exact slice of the line it matched.
///
/// Delimiters (`[`, `]`, `#` and surrounding spaces) are never part of `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind, text }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:?}", self.kind, self.text)
    }
}
