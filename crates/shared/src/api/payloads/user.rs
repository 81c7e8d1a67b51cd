use serde::{Deserialize, Serialize};

use super::{optional_text, present};
use crate::{api::error::ApiError, model::NewUser};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUserRequest {
    #[serde(default, deserialize_with = "optional_text")]
    pub username: Option<String>,
}

impl NewUserRequest {
    pub fn validate(self) -> Result<NewUser, ApiError> {
        let username = present(self.username).ok_or(ApiError::missing("username"))?;
        Ok(NewUser::new(username))
    }
}
