//! Bullet journal line parsing.
//!
//! A journal line looks like:
//! - `@ [9:30a] Morning Meeting #work` (an event at 09:30)
//! - `! [doing] Scrub the kitchen floor` (a task in the `doing` state)
//! - `! Take out the papers #andthetrash` (a task, state `ready`)
//!
//! Text flows one way: line → [`Scanner`] → [`Lexer`] tokens → [`parse`] → [`Record`].

pub mod error;
mod lexer;
mod parser;
mod record;
mod scanner;
mod token;

pub use error::{AnnotationError, LexError, ParseError};
pub use lexer::{lex, Lexer, BULLET_SYMBOLS};
pub use parser::{parse, parse_time};
pub use record::{EntryKind, Event, Record, Task, Time, DEFAULT_TASK_STATE};
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
