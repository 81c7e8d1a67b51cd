use serde::{Deserialize, Serialize};

use super::optional_text;
use crate::{
    date::human_readable,
    filter::LogFilter,
    model::{Exercise, User},
    types::Uuid,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQuery {
    #[serde(default, deserialize_with = "optional_text")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub limit: Option<String>,
}

impl LogQuery {
    pub fn filter(&self) -> LogFilter {
        LogFilter::build(self.from.as_deref(), self.to.as_deref(), self.limit.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: u32,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(value: Exercise) -> Self {
        Self {
            description: value.description,
            duration: value.duration,
            date: human_readable(value.date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLog {
    pub user_id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl ExerciseLog {
    pub fn new(user: User, exercises: Vec<Exercise>) -> Self {
        let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();
        Self {
            user_id: user.id,
            username: user.username,
            count: log.len(),
            log,
        }
    }
}
