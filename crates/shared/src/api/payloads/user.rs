use serde::{Deserialize, Serialize};

use super::non_blank;
use crate::{
    api::error::ValidationError,
    model::{NewUser, ValidateModel},
    types::Uuid,
};

/// Form body of `POST /api/users`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub username: Option<String>,
}

impl ValidateModel for CreateUserPayload {
    fn validate(&self) -> Result<(), ValidationError> {
        match non_blank(&self.username) {
            Some(_) => Ok(()),
            None => Err(ValidationError::new("username is required")),
        }
    }
}

impl TryFrom<CreateUserPayload> for NewUser {
    type Error = ValidationError;

    fn try_from(payload: CreateUserPayload) -> Result<Self, Self::Error> {
        payload.validate()?;
        let username = payload.username.unwrap_or_default();
        Ok(NewUser::new(Uuid::new_v4(), username))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_username_required() {
        let err = NewUser::try_from(CreateUserPayload::default()).unwrap_err();
        assert_eq!(err.error_messages, vec!["username is required"]);

        let blank = CreateUserPayload {
            username: Some("  ".into()),
        };
        assert!(NewUser::try_from(blank).is_err());
    }

    #[test]
    fn test_username_kept_verbatim() {
        let new_user = NewUser::try_from(CreateUserPayload {
            username: Some("fcc_test".into()),
        })
        .unwrap();
        assert_eq!(new_user.username, "fcc_test");
    }
}
