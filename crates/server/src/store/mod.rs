//! Record persistence.
//!
//! Handlers and services only see [`RecordStore`], so the sqlite store used in
//! production can be swapped for the in-memory one in tests or with
//! `--record-store memory`.

use std::fmt;

use axum::async_trait;
use shared::{
    api::error::{ApiError, USERNAME_TAKEN},
    filter::LogFilter,
    model::{Exercise, NewUser, User},
    types::Uuid,
};
use thiserror::Error;

mod memory;
pub use memory::*;

mod sqlite;
pub use sqlite::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A unique column already holds the value
    #[error("{field} must be unique")]
    UniqueViolation { field: String },
    #[error("{0}")]
    Backend(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation { field } if field == "username" => ApiError::Validation {
                message: USERNAME_TAKEN.to_owned(),
            },
            e @ StoreError::UniqueViolation { .. } => ApiError::Validation {
                message: e.to_string(),
            },
            StoreError::Backend(message) => ApiError::Store { message },
        }
    }
}

#[async_trait]
pub trait RecordStore: fmt::Debug + Send + Sync {
    /// Fails with [`StoreError::UniqueViolation`] if the username exists
    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError>;

    async fn find_user(&self, id: &Uuid) -> Result<Option<User>, StoreError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// All users in insertion order
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    async fn insert_exercise(&self, exercise: Exercise) -> Result<Exercise, StoreError>;

    /// A user's exercises in insertion order, restricted by the filter
    async fn find_exercises(
        &self,
        user_id: &Uuid,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, StoreError>;
}
