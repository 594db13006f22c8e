//! Lexer for single journal lines.
//!
//! A line is lexed by a fixed chain of states, each consuming one construct:
//!
//! ```text
//! Symbol -> Annotation -> Text -> Tag -> Tag -> ... -> Done
//! ```
//!
//! The lexer is an [`Iterator`] and produces tokens lazily. It is single
//! pass: once it returns `None` (or an error) it is exhausted.

use tracing::{debug, trace};

use super::error::LexError;
use super::scanner::Scanner;
use super::token::{Token, TokenKind};

/// Characters accepted as the leading bullet marker.
pub const BULLET_SYMBOLS: &str = "!#$%&*+,./:;<=>?@^_`|~-";

/// Lookahead that ends a text or tag span.
const TAG_INTRODUCER: &str = " #";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Symbol,
    Annotation,
    Text,
    Tag,
    Done,
}

/// Pull-based token stream over one line.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    scanner: Scanner<'src>,
    state: State,
}

/// Start lexing `line`.
///
/// Nothing is consumed until the first call to `next`.
///
/// # Examples
///
/// ```
/// use bujo::journal::{lex, TokenKind};
///
/// let tokens: Vec<_> = lex("- [greeting] hello there #today")
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1].kind, TokenKind::Annotation);
/// assert_eq!(tokens[1].text, "greeting");
/// ```
#[must_use]
pub const fn lex(line: &str) -> Lexer<'_> {
    Lexer::new(line)
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub const fn new(line: &'src str) -> Self {
        Self {
            scanner: Scanner::new(line),
            state: State::Symbol,
        }
    }

    /// Run one state. Returns the token it emitted, if any, and moves
    /// `self.state` to the next state.
    fn step(&mut self) -> Result<Option<Token<'src>>, LexError> {
        let s = &mut self.scanner;
        match self.state {
            State::Symbol => {
                self.state = State::Done;
                s.ignore_run(" ");
                if !s.accept(BULLET_SYMBOLS) {
                    let err = s.peek().map_or(LexError::UnexpectedEof, |found| {
                        LexError::ExpectedSymbol { found }
                    });
                    debug!(error = %err, "rejected line");
                    return Err(err);
                }
                self.state = State::Annotation;
                Ok(Some(s.emit(TokenKind::Bullet)))
            },
            State::Annotation => {
                self.state = State::Text;
                s.ignore_run(" ");
                if s.peek() != Some('[') {
                    return Ok(None);
                }
                s.ignore_run("[");
                loop {
                    match s.next() {
                        Some(']') => {
                            s.backup();
                            break;
                        },
                        Some(_) => {},
                        None => {
                            trace!("annotation runs to end of line");
                            break;
                        },
                    }
                }
                let token = s.emit(TokenKind::Annotation);
                s.ignore_run("]");
                Ok(Some(token))
            },
            State::Text => {
                self.state = State::Tag;
                s.ignore_run(" ");
                consume_until_tag(s);
                Ok(Some(s.emit(TokenKind::Text)))
            },
            State::Tag => {
                s.ignore_run(" ");
                if s.peek() != Some('#') {
                    self.state = State::Done;
                    return Ok(None);
                }
                s.ignore_run("#");
                consume_until_tag(s);
                Ok(Some(s.emit(TokenKind::Tag)))
            },
            State::Done => Ok(None),
        }
    }
}

/// Consume up to the next ` #` or the end of input.
fn consume_until_tag(s: &mut Scanner<'_>) {
    while s.peek2() != TAG_INTRODUCER && s.next().is_some() {}
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.state != State::Done {
            match self.step() {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => {},
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
