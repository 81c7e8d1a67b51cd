//! Request orchestration on top of a [`RecordStore`].
//!
//! Each operation performs at most one read, or one read and one write,
//! against the store.

use shared::{api::error::ApiError, model::User, types::Uuid};

use crate::store::RecordStore;

mod exercises;
pub use exercises::*;

mod log_query;
pub use log_query::*;

mod users;
pub use users::*;

/// Looks up the user a request refers to. Ids that aren't well formed can't
/// match a user so they are reported as not found
pub(crate) async fn resolve_user(store: &dyn RecordStore, user_id: &str) -> Result<User, ApiError> {
    let Ok(id) = Uuid::parse(user_id) else {
        return Err(ApiError::unknown_user());
    };

    store.find_user(&id).await?.ok_or_else(ApiError::unknown_user)
}
