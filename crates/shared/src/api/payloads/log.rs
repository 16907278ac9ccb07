use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    model::{Exercise, User},
    types::{calendar_date::calendar_string, Uuid},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    #[serde(with = "calendar_string")]
    pub date: NaiveDate,
}

impl From<&Exercise> for LogEntry {
    fn from(exercise: &Exercise) -> Self {
        Self {
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}

/// Response of `GET /api/users/:id/logs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub log: Vec<LogEntry>,
}

impl LogResponse {
    pub fn new(user: &User, exercises: &[Exercise]) -> Self {
        Self {
            username: user.username.clone(),
            count: exercises.len(),
            id: user.id,
            log: exercises.iter().map(LogEntry::from).collect(),
        }
    }
}
