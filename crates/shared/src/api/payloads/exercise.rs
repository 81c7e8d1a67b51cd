use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{optional_text, present};
use crate::{
    api::error::ApiError,
    date::{human_readable, parse_calendar_date},
    model::{Exercise, User, DEFAULT_DURATION_MINUTES},
    types::Uuid,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExerciseRequest {
    #[serde(default, deserialize_with = "optional_text")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub date: Option<String>,
}

/// A validated exercise submission with all defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSubmission {
    /// Required, still unresolved
    pub user_id: String,
    /// Empty when not given
    pub description: String,
    /// Minutes, [`DEFAULT_DURATION_MINUTES`] when absent or not a positive integer
    pub duration: u32,
    /// `today` when absent or unparseable
    pub date: NaiveDate,
}

impl AddExerciseRequest {
    pub fn validate(self, today: NaiveDate) -> Result<ExerciseSubmission, ApiError> {
        let user_id = present(self.user_id).ok_or(ApiError::missing("userId"))?;

        let description = self
            .description
            .map(|v| v.trim().to_owned())
            .unwrap_or_default();

        let duration = present(self.duration)
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_DURATION_MINUTES);

        let date = self
            .date
            .and_then(|v| parse_calendar_date(&v).ok())
            .unwrap_or(today);

        Ok(ExerciseSubmission {
            user_id,
            description,
            duration,
            date,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseAdded {
    pub id: Uuid,
    pub username: String,
    pub date: String,
    pub duration: u32,
    pub description: String,
}

impl ExerciseAdded {
    pub fn new(user: &User, exercise: &Exercise) -> Self {
        Self {
            id: exercise.id,
            username: user.username.clone(),
            date: human_readable(exercise.date),
            duration: exercise.duration,
            description: exercise.description.clone(),
        }
    }
}
