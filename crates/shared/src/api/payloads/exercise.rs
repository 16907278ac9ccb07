use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::non_blank;
use crate::{
    api::error::ValidationError,
    model::{Exercise, User, ValidateModel},
    types::{
        calendar_date::{calendar_string, parse_date},
        Uuid,
    },
};

/// Form body of `POST /api/users/:id/exercises`. Everything arrives as text
/// and is checked by [`ValidateModel`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateExercisePayload {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// A validated [`CreateExercisePayload`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDetails {
    pub description: String,
    pub duration: i64,
    /// `None` means the exercise happened today
    pub date: Option<NaiveDate>,
}

impl ValidateModel for CreateExercisePayload {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut error_messages = Vec::new();

        if non_blank(&self.description).is_none() {
            error_messages.push("description is required".to_owned());
        }

        match non_blank(&self.duration) {
            None => error_messages.push("duration is required".to_owned()),
            Some(duration) => {
                if duration.trim().parse::<i64>().is_err() {
                    error_messages.push(format!(
                        "duration must be a whole number of minutes, got '{duration}'"
                    ));
                }
            }
        }

        if let Some(date) = non_blank(&self.date) {
            if parse_date(date).is_none() {
                error_messages.push(format!("date '{date}' is not a valid date"));
            }
        }

        if error_messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { error_messages })
        }
    }
}

impl TryFrom<CreateExercisePayload> for ExerciseDetails {
    type Error = ValidationError;

    fn try_from(payload: CreateExercisePayload) -> Result<Self, Self::Error> {
        payload.validate()?;

        let duration = non_blank(&payload.duration)
            .and_then(|d| d.trim().parse().ok())
            .ok_or_else(|| ValidationError::new("duration is required"))?;
        let date = non_blank(&payload.date).and_then(parse_date);

        Ok(Self {
            description: payload.description.unwrap_or_default(),
            duration,
            date,
        })
    }
}

/// Response of `POST /api/users/:id/exercises`. `_id` is the id of the user,
/// not of the exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i64,
    #[serde(with = "calendar_string")]
    pub date: NaiveDate,
    #[serde(rename = "_id")]
    pub id: Uuid,
}

impl ExerciseResponse {
    pub fn new(user: &User, exercise: &Exercise) -> Self {
        Self {
            username: user.username.clone(),
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: exercise.date,
            id: user.id,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn payload(description: &str, duration: &str, date: Option<&str>) -> CreateExercisePayload {
        CreateExercisePayload {
            description: Some(description.into()),
            duration: Some(duration.into()),
            date: date.map(Into::into),
        }
    }

    #[test]
    fn test_valid_payload() {
        let details = ExerciseDetails::try_from(payload("test", "60", Some("1990-01-01"))).unwrap();
        assert_eq!(
            details,
            ExerciseDetails {
                description: "test".into(),
                duration: 60,
                date: NaiveDate::from_ymd_opt(1990, 1, 1),
            }
        );
    }

    #[test]
    fn test_blank_date_means_today() {
        let details = ExerciseDetails::try_from(payload("test", "60", Some(""))).unwrap();
        assert_eq!(details.date, None);
        let details = ExerciseDetails::try_from(payload("test", "60", None)).unwrap();
        assert_eq!(details.date, None);
    }

    #[test]
    fn test_collects_all_messages() {
        let err = ExerciseDetails::try_from(CreateExercisePayload {
            description: None,
            duration: Some("an hour".into()),
            date: Some("someday".into()),
        })
        .unwrap_err();
        assert_eq!(err.error_messages.len(), 3);
        assert_eq!(err.error_messages[0], "description is required");
        assert_eq!(
            err.error_messages[1],
            "duration must be a whole number of minutes, got 'an hour'"
        );
    }

    #[test]
    fn test_duration_required() {
        let err = ExerciseDetails::try_from(CreateExercisePayload {
            description: Some("test".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.error_messages, vec!["duration is required"]);
    }

    #[test]
    fn test_response_uses_user_id() {
        let user = User {
            id: Uuid::new_v4(),
            username: "fcc_test".into(),
        };
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id: user.id,
            description: "test".into(),
            duration: 60,
            date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        };

        let json = serde_json::to_value(ExerciseResponse::new(&user, &exercise)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "fcc_test",
                "description": "test",
                "duration": 60,
                "date": "Mon Jan 01 1990",
                "_id": user.id.to_string(),
            })
        );
    }
}
