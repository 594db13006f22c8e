//! Parser from journal tokens to [`Record`]s.
//!
//! The first token must be a bullet; its text picks the record kind. Every
//! following token is folded into the record under construction. The
//! annotation means a clock time for events and a state for tasks.

use tracing::debug;

use super::error::{AnnotationError, ParseError};
use super::lexer::{lex, Lexer};
use super::record::{EntryKind, Event, Record, Task, Time};
use super::scanner::Scanner;
use super::token::{Token, TokenKind};

const DIGITS: &str = "0123456789";

/// Parse a single line into a record.
///
/// # Errors
///
/// Returns a [`ParseError`] if the line has no bullet, the bullet is neither
/// `@` nor `!`, or an event annotation is not a time.
///
/// # Examples
///
/// ```
/// use bujo::journal::{parse, Record, Time};
///
/// let Record::Event(event) = parse("@ [9:30a] Morning Meeting").unwrap() else {
///     panic!("expected an event");
/// };
/// assert_eq!(event.text, "Morning Meeting");
/// assert_eq!(event.time, Some(Time::new(9, 30)));
/// ```
pub fn parse(line: &str) -> Result<Record, ParseError> {
    let mut tokens = lex(line);
    let bullet = tokens.next().ok_or(ParseError::UnexpectedEof)??;
    if bullet.kind != TokenKind::Bullet {
        return Err(ParseError::ExpectedBullet { found: bullet.kind });
    }

    let kind = EntryKind::from_bullet(bullet.text).ok_or_else(|| {
        debug!(marker = bullet.text, "invalid entry type");
        ParseError::InvalidEntryType {
            marker: bullet.text.to_string(),
        }
    })?;
    debug!(%kind, "parsing entry");

    match kind {
        EntryKind::Event => parse_event(tokens).map(Record::Event),
        EntryKind::Task => parse_task(tokens).map(Record::Task),
    }
}

fn parse_event(tokens: Lexer<'_>) -> Result<Event, ParseError> {
    let mut event = Event::default();
    for token in tokens {
        let Token { kind, text } = token?;
        match kind {
            TokenKind::Tag => event.tags.push(text.to_string()),
            TokenKind::Annotation => event.time = Some(parse_time(text)?),
            TokenKind::Text => event.text = text.to_string(),
            TokenKind::Bullet => {},
        }
    }
    Ok(event)
}

fn parse_task(tokens: Lexer<'_>) -> Result<Task, ParseError> {
    let mut task = Task::default();
    for token in tokens {
        let Token { kind, text } = token?;
        match kind {
            TokenKind::Tag => task.tags.push(text.to_string()),
            TokenKind::Annotation => task.state = text.to_string(),
            TokenKind::Text => task.text = text.to_string(),
            TokenKind::Bullet => {},
        }
    }
    Ok(task)
}

/// Read an event annotation of the form `<digits>:<digits>[ ][a|p]`.
///
/// Hours are normalized from the 12-hour clock when a meridiem letter is
/// present: `12a` becomes hour 0 and `1p` through `11p` gain 12 hours. Any
/// other trailing character is ignored. Values are not range checked.
///
/// # Errors
///
/// Returns [`AnnotationError::InvalidNumber`] if the hour or minute digit
/// run is empty or does not fit in a `u32`, and
/// [`AnnotationError::HourOverflow`] if adding 12 hours for `p` would
/// overflow a `u32`.
pub fn parse_time(annotation: &str) -> Result<Time, AnnotationError> {
    let mut s = Scanner::new(annotation);

    s.accept_run(DIGITS);
    let hour = s.pending();
    s.ignore();
    s.ignore_run(":");
    s.accept_run(DIGITS);
    let minute = s.pending();
    s.ignore();
    s.ignore_run(" ");
    let meridiem = s.next();

    let number = |field: &'static str, digits: &str| {
        digits.parse::<u32>().map_err(|source| AnnotationError::InvalidNumber {
            annotation: annotation.to_string(),
            field,
            digits: digits.to_string(),
            source,
        })
    };
    let mut hour = number("hour", hour)?;
    let minute = number("minute", minute)?;

    match meridiem {
        Some('a') if hour == 12 => hour = 0,
        Some('p') if hour != 12 => {
            hour = hour
                .checked_add(12)
                .ok_or_else(|| AnnotationError::HourOverflow {
                    annotation: annotation.to_string(),
                    hour,
                })?;
        },
        _ => {},
    }

    Ok(Time::new(hour, minute))
}
