use colored::Colorize;

use crate::journal::{EntryKind, Event, Record, Task, Token, TokenKind, DEFAULT_TASK_STATE};

/// Format a list of records, one per line
pub fn format_records_pretty(records: &[Record]) -> String {
    records
        .iter()
        .map(format_record_pretty)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single record as pretty output
pub fn format_record_pretty(record: &Record) -> String {
    let mut line = match record {
        Record::Event(event) => format_event_line(event),
        Record::Task(task) => format_task_line(task),
    };

    if !record.tags().is_empty() {
        let tags_str = record
            .tags()
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        line.push_str(&format!("  {}", tags_str.cyan()));
    }

    line
}

fn format_event_line(event: &Event) -> String {
    let mut line = format!("{} ", EntryKind::Event.bullet().to_string().magenta().bold());

    if let Some(time) = event.time {
        line.push_str(&format!("{} ", time.to_string().yellow()));
        // out of range times have no 12-hour form
        if let Some(clock) = time.to_naive_time() {
            line.push_str(&format!("{} ", format!("({})", clock.format("%-I:%M %p")).dimmed()));
        }
    }

    line.push_str(&event.text.bold().to_string());
    line
}

fn format_task_line(task: &Task) -> String {
    let state = format!("[{}]", task.state);
    let state = if task.state == DEFAULT_TASK_STATE {
        state.white()
    } else {
        state.green()
    };

    let bullet = EntryKind::Task.bullet().to_string();
    format!("{} {} {}", bullet.blue().bold(), state, task.text.bold())
}

/// Format tokens as an aligned `kind  "text"` listing
pub fn format_tokens_pretty(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| {
            let kind = format!("{:<10}", token.kind.to_string());
            let kind = match token.kind {
                TokenKind::Bullet => kind.magenta(),
                TokenKind::Annotation => kind.yellow(),
                TokenKind::Text => kind.normal(),
                TokenKind::Tag => kind.cyan(),
            };
            format!("{kind} {:?}", token.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{lex, parse};

    #[test]
    fn test_format_event_with_time_and_tags() {
        let record = parse("@ [2:05p] Dentist #health #teeth").unwrap();
        let output = format_record_pretty(&record);

        assert!(output.contains("14:05"));
        assert!(output.contains("(2:05 PM)"));
        assert!(output.contains("Dentist"));
        assert!(output.contains("#health #teeth"));
    }

    #[test]
    fn test_format_event_out_of_range_time() {
        let record = parse("@ [99:99] Nowhen").unwrap();
        let output = format_record_pretty(&record);

        assert!(output.contains("99:99"));
        assert!(!output.contains("AM"));
        assert!(!output.contains("PM"));
    }

    #[test]
    fn test_format_task_state() {
        let output = format_record_pretty(&parse("! Take out the papers").unwrap());
        assert!(output.contains("[ready]"));
        assert!(output.contains("Take out the papers"));

        let output = format_record_pretty(&parse("! [done] Laundry").unwrap());
        assert!(output.contains("[done]"));
    }

    #[test]
    fn test_format_records_one_per_line() {
        let records = vec![parse("@ A").unwrap(), parse("! B").unwrap()];
        let output = format_records_pretty(&records);

        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_format_tokens_pretty() {
        let tokens: Vec<_> = lex("- [greeting] hello there #today")
            .collect::<Result<_, _>>()
            .unwrap();
        let output = format_tokens_pretty(&tokens);

        assert_eq!(output.lines().count(), 4);
        assert!(output.contains("\"greeting\""));
        assert!(output.contains("\"hello there\""));
        assert!(output.contains("\"today\""));
    }
}
