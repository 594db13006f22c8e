//! Structured records built from journal lines.

use chrono::NaiveTime;
use serde::Serialize;

/// State given to a task whose line carries no annotation.
pub const DEFAULT_TASK_STATE: &str = "ready";

/// The kind of entry selected by a line's bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// `@`
    Event,
    /// `!`
    Task,
}

impl EntryKind {
    /// Map a bullet token's text to an entry kind.
    #[must_use]
    pub fn from_bullet(bullet: &str) -> Option<Self> {
        match bullet {
            "@" => Some(Self::Event),
            "!" => Some(Self::Task),
            _ => None,
        }
    }

    #[must_use]
    pub const fn bullet(self) -> char {
        match self {
            Self::Event => '@',
            Self::Task => '!',
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Event => "event",
            Self::Task => "task",
        })
    }
}

/// A time of day in 24-hour form.
///
/// Values are not range checked: `99:99` in an annotation is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Time {
    pub hour: u32,
    pub minute: u32,
}

impl Time {
    #[must_use]
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Convert to a chrono time, or `None` if this is not a real clock time.
    #[must_use]
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// An `@` entry: something that happens, optionally at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Event {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Time>,
}

/// A `!` entry: something to do, with a free-form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub text: String,
    pub state: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Default for Task {
    fn default() -> Self {
        Self {
            text: String::new(),
            state: DEFAULT_TASK_STATE.to_string(),
            tags: Vec::new(),
        }
    }
}

/// The result of parsing one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Event(Event),
    Task(Task),
}

impl Record {
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::Event(_) => EntryKind::Event,
            Self::Task(_) => EntryKind::Task,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Event(event) => &event.text,
            Self::Task(task) => &task.text,
        }
    }

    /// Tags in the order they appeared on the line, duplicates included.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Event(event) => &event.tags,
            Self::Task(task) => &task.tags,
        }
    }
}

impl From<Event> for Record {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

impl From<Task> for Record {
    fn from(task: Task) -> Self {
        Self::Task(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_from_bullet() {
        assert_eq!(EntryKind::from_bullet("@"), Some(EntryKind::Event));
        assert_eq!(EntryKind::from_bullet("!"), Some(EntryKind::Task));
        assert_eq!(EntryKind::from_bullet("-"), None);
        assert_eq!(EntryKind::Event.bullet(), '@');
        assert_eq!(EntryKind::Task.bullet(), '!');
    }

    #[test]
    fn test_time_display_pads() {
        assert_eq!(Time::new(9, 5).to_string(), "09:05");
        assert_eq!(Time::new(99, 99).to_string(), "99:99");
    }

    #[test]
    fn test_time_to_naive_time() {
        assert_eq!(
            Time::new(13, 45).to_naive_time(),
            NaiveTime::from_hms_opt(13, 45, 0)
        );
        assert_eq!(Time::new(24, 0).to_naive_time(), None);
        assert_eq!(Time::new(99, 99).to_naive_time(), None);
    }

    #[test]
    fn test_task_default_state() {
        assert_eq!(Task::default().state, "ready");
    }

    #[test]
    fn test_record_accessors() {
        let record = Record::from(Task {
            text: "dishes".to_string(),
            tags: vec!["home".to_string()],
            ..Task::default()
        });
        assert_eq!(record.kind(), EntryKind::Task);
        assert_eq!(record.text(), "dishes");
        assert_eq!(record.tags(), vec!["home".to_string()].as_slice());
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let record = Record::from(Event {
            text: "Standup".to_string(),
            tags: vec![],
            time: Some(Time::new(9, 30)),
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "event",
                "text": "Standup",
                "time": {"hour": 9, "minute": 30}
            })
        );
    }

    #[test]
    fn test_task_serializes_tags_when_present() {
        let record = Record::from(Task {
            text: "Call".to_string(),
            state: "doing".to_string(),
            tags: vec!["a".to_string(), "a".to_string()],
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "task");
        assert_eq!(json["state"], "doing");
        assert_eq!(json["tags"], serde_json::json!(["a", "a"]));
    }
}
