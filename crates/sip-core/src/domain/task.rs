use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

const DEFAULT_TITLE: &str = "Untitled";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default, with = "hh_mm")]
    pub due_time: Option<NaiveTime>,
    pub created_at: DateTime<Utc>,
}

/// Partial update for a task.
///
/// The outer `Option` on the due fields means "leave unchanged"; an inner
/// `None` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub done: Option<bool>,
    pub due_date: Option<Option<NaiveDate>>,
    pub due_time: Option<Option<NaiveTime>>,
}

impl Task {
    /// Create an open task. A blank title becomes `"Untitled"`.
    pub fn new(
        title: Option<String>,
        due_date: Option<NaiveDate>,
        due_time: Option<NaiveTime>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            title: normalize_title(title),
            done: false,
            due_date,
            due_time,
            created_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = normalize_title(Some(title));
        }
        if let Some(done) = patch.done {
            self.done = done;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(due_time) = patch.due_time {
            self.due_time = due_time;
        }
    }

    /// Deadline as a local timestamp. A date without a time is due at midnight.
    pub fn due_at(&self) -> Option<NaiveDateTime> {
        let date = self.due_date?;
        match self.due_time {
            Some(time) => Some(date.and_time(time)),
            None => date.and_hms_opt(0, 0, 0),
        }
    }

    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.done && self.due_at().is_some_and(|due| now > due)
    }

    /// Human-readable deadline, e.g. `"Due: 2024-05-01 09:30"`.
    pub fn due_label(&self, now: NaiveDateTime) -> Option<String> {
        let date = self.due_date?;
        let mut when = date.format(DATE_FORMAT).to_string();
        if let Some(time) = self.due_time {
            when.push(' ');
            when.push_str(&time.format(TIME_FORMAT).to_string());
        }

        let prefix = if self.is_overdue(now) { "Overdue" } else { "Due" };
        Some(format!("{prefix}: {when}"))
    }
}

fn normalize_title(title: Option<String>) -> String {
    title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Parse an optional `YYYY-MM-DD` date. Empty input means no date.
pub fn parse_due_date(raw: Option<&str>) -> Result<Option<NaiveDate>, DomainError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| DomainError::Validation(format!("Invalid due date: {s}"))),
    }
}

/// Parse an optional `HH:MM` (or `HH:MM:SS`) time. Empty input means no time.
pub fn parse_due_time(raw: Option<&str>) -> Result<Option<NaiveTime>, DomainError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => parse_time(s)
            .map(Some)
            .map_err(|_| DomainError::Validation(format!("Invalid due time: {s}"))),
    }
}

fn parse_time(s: &str) -> chrono::ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FORMAT).or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
}

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format(super::TIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.filter(|s| !s.is_empty())
            .map(|s| super::parse_time(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Which tasks a list view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    /// Open and not yet overdue.
    Active,
    Done,
    Overdue,
}

impl TaskFilter {
    pub fn matches(self, task: &Task, now: NaiveDateTime) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.done && !task.is_overdue(now),
            Self::Done => task.done,
            Self::Overdue => task.is_overdue(now),
        }
    }

    pub fn apply(self, tasks: Vec<Task>, now: NaiveDateTime) -> Vec<Task> {
        tasks
            .into_iter()
            .filter(|task| self.matches(task, now))
            .collect()
    }
}

impl FromStr for TaskFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "done" => Ok(Self::Done),
            "overdue" => Ok(Self::Overdue),
            other => Err(DomainError::Validation(format!("Unknown filter: {other}"))),
        }
    }
}

/// Counters shown under the task list. `active` counts every open task,
/// overdue ones included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub active: usize,
    pub done: usize,
    pub overdue: usize,
}

impl TaskStats {
    pub fn collect(tasks: &[Task], now: NaiveDateTime) -> Self {
        tasks.iter().fold(Self::default(), |mut stats, task| {
            if task.done {
                stats.done += 1;
            } else {
                stats.active += 1;
            }
            if task.is_overdue(now) {
                stats.overdue += 1;
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .unwrap()
            .and_time(parse_time(time).unwrap())
    }

    fn due(date: &str, time: Option<&str>) -> Task {
        Task::new(
            Some("Pay rent".to_string()),
            parse_due_date(Some(date)).unwrap(),
            parse_due_time(time).unwrap(),
        )
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(Some("   ".to_string()), None, None);
        assert_eq!(task.title, "Untitled");
        assert!(!task.done);
        assert_eq!(task.id.len(), 32);
        assert_ne!(task.id, Task::new(None, None, None).id);
    }

    #[test]
    fn test_overdue_requires_past_deadline_and_open() {
        let mut task = due("2024-03-01", Some("09:30"));

        assert!(!task.is_overdue(at("2024-03-01", "09:30")));
        assert!(task.is_overdue(at("2024-03-01", "09:31")));

        task.done = true;
        assert!(!task.is_overdue(at("2024-03-02", "00:00")));
    }

    #[test]
    fn test_date_without_time_is_due_at_midnight() {
        let task = due("2024-03-01", None);
        assert!(!task.is_overdue(at("2024-03-01", "00:00")));
        assert!(task.is_overdue(at("2024-03-01", "00:01")));
    }

    #[test]
    fn test_task_without_due_date_never_overdue() {
        let task = Task::new(Some("Someday".to_string()), None, None);
        assert!(!task.is_overdue(at("2099-01-01", "00:00")));
        assert_eq!(task.due_label(at("2099-01-01", "00:00")), None);
    }

    #[test]
    fn test_due_label() {
        let task = due("2024-03-01", Some("09:30"));
        assert_eq!(
            task.due_label(at("2024-02-01", "00:00")).as_deref(),
            Some("Due: 2024-03-01 09:30")
        );
        assert_eq!(
            task.due_label(at("2024-04-01", "00:00")).as_deref(),
            Some("Overdue: 2024-03-01 09:30")
        );
    }

    #[test]
    fn test_filters_and_stats() {
        let now = at("2024-03-10", "12:00");
        let open = Task::new(Some("open".to_string()), None, None);
        let late = due("2024-03-01", None);
        let mut finished = due("2024-03-01", None);
        finished.done = true;
        let tasks = vec![open.clone(), late.clone(), finished.clone()];

        let ids = |filter: TaskFilter| -> Vec<String> {
            filter
                .apply(tasks.clone(), now)
                .into_iter()
                .map(|t| t.id)
                .collect()
        };

        assert_eq!(ids(TaskFilter::All).len(), 3);
        assert_eq!(ids(TaskFilter::Active), vec![open.id.clone()]);
        assert_eq!(ids(TaskFilter::Done), vec![finished.id.clone()]);
        assert_eq!(ids(TaskFilter::Overdue), vec![late.id.clone()]);

        assert_eq!(
            TaskStats::collect(&tasks, now),
            TaskStats {
                active: 2,
                done: 1,
                overdue: 1
            }
        );
    }

    #[test]
    fn test_patch_leaves_absent_fields() {
        let mut task = due("2024-03-01", Some("09:30"));
        task.apply(TaskPatch {
            done: Some(true),
            ..TaskPatch::default()
        });
        assert!(task.done);
        assert_eq!(task.title, "Pay rent");
        assert!(task.due_time.is_some());

        task.apply(TaskPatch {
            due_time: Some(None),
            title: Some("Pay rent early".to_string()),
            ..TaskPatch::default()
        });
        assert_eq!(task.due_time, None);
        assert!(task.due_date.is_some());
        assert_eq!(task.title, "Pay rent early");
    }

    #[test]
    fn test_parse_due_fields() {
        assert_eq!(parse_due_date(Some("")).unwrap(), None);
        assert_eq!(parse_due_time(None).unwrap(), None);
        assert!(parse_due_date(Some("03/01/2024")).is_err());
        assert!(parse_due_time(Some("25:00")).is_err());
        assert_eq!(
            parse_due_time(Some("07:05:00")).unwrap(),
            NaiveTime::from_hms_opt(7, 5, 0)
        );
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let task = due("2024-03-01", Some("09:30"));
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["dueDate"], "2024-03-01");
        assert_eq!(json["dueTime"], "09:30");
        assert_eq!(json["done"], false);
        assert!(json["createdAt"].is_string());

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_reads_task_with_null_due_fields() {
        let raw = r#"{"id":"lq3k9x2abc","title":"Old","done":true,"dueDate":null,"dueTime":null,"createdAt":"2024-01-01T10:00:00.000Z"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.id, "lq3k9x2abc");
        assert_eq!(task.due_time, None);
    }
}
