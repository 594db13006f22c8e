//! Character cursor over a single journal line.
//!
//! The scanner knows nothing about the grammar. It tracks two byte offsets
//! into the input: `start`, the beginning of the span being built, and
//! `pos`, the next character to read. Lexer states move `pos` forward,
//! then either [`Scanner::emit`] the span as a token or [`Scanner::ignore`] it.

use tracing::trace;

use super::token::{Token, TokenKind};

/// A backtrackable cursor over an immutable input string.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    input: &'src str,
    start: usize,
    pos: usize,
    /// Byte width of the last character returned by `next`, zero at end of input.
    width: usize,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'src str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            width: 0,
        }
    }

    /// Consume and return the next character, or `None` at end of input.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        let Some(c) = self.input[self.pos..].chars().next() else {
            self.width = 0;
            return None;
        };
        self.width = c.len_utf8();
        self.pos += self.width;
        Some(c)
    }

    /// Step back over the character returned by the last `next`.
    ///
    /// Only one step of history is kept: calling this twice without an
    /// intervening `next` steps back over the same character width again.
    pub fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    /// Look at the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let c = self.next();
        self.backup();
        c
    }

    /// Look at the next two characters without consuming them.
    ///
    /// Returns fewer characters when the input is nearly exhausted, and an
    /// empty string at end of input.
    #[must_use]
    pub fn peek2(&self) -> &'src str {
        let rest = &self.input[self.pos..];
        let end = rest.char_indices().nth(2).map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    }

    /// Consume the next character if it is one of `charset`.
    pub fn accept(&mut self, charset: &str) -> bool {
        match self.next() {
            Some(c) if charset.contains(c) => true,
            Some(_) => {
                self.backup();
                false
            },
            None => false,
        }
    }

    /// Consume characters for as long as they are in `charset`.
    pub fn accept_run(&mut self, charset: &str) {
        while self.accept(charset) {}
    }

    /// Drop the pending span without emitting it.
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Skip a run of delimiter characters so they never reach a token.
    pub fn ignore_run(&mut self, charset: &str) {
        self.accept_run(charset);
        self.ignore();
    }

    /// The span between the last mark and the current position.
    #[must_use]
    pub fn pending(&self) -> &'src str {
        &self.input[self.start..self.pos]
    }

    /// Emit the pending span as a token of `kind` and start a new span.
    pub fn emit(&mut self, kind: TokenKind) -> Token<'src> {
        let token = Token::new(kind, self.pending());
        trace!(kind = %kind, text = token.text, start = self.start, end = self.pos, "emit");
        self.start = self.pos;
        token
    }

    /// Whether every character of the input has been consumed.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}
