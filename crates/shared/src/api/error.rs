use http::StatusCode;
use thiserror::Error;

pub const USERNAME_TAKEN: &str = "Username already taken!";
pub const UNKNOWN_USER_ID: &str = "Invalid user id";

/// Failures surfaced to API callers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A required field was absent or blank
    #[error("You need to enter a {name}")]
    MissingParameter { name: &'static str },
    /// The store rejected the record, e.g. a duplicate unique field
    #[error("{message}")]
    Validation { message: String },
    /// A referenced record doesn't exist
    #[error("{message}")]
    NotFound { message: String },
    /// The store itself failed
    #[error("Something went wrong: {message}")]
    Store { message: String },
}

impl ApiError {
    pub fn missing(name: &'static str) -> Self {
        Self::MissingParameter { name }
    }

    pub fn unknown_user() -> Self {
        Self::NotFound {
            message: UNKNOWN_USER_ID.to_owned(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter { .. } | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
