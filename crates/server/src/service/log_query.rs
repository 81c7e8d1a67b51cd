use shared::api::{
    error::ApiError,
    payloads::{ExerciseLog, LogQuery},
};
use tracing::{debug, instrument};

use super::resolve_user;
use crate::store::RecordStore;

/// Resolves the user, then returns their exercises matching the query's date
/// range and cap
#[instrument(skip(store))]
pub async fn fetch_log(store: &dyn RecordStore, query: LogQuery) -> Result<ExerciseLog, ApiError> {
    let user_id = query
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ApiError::missing("userId"))?;
    let user = resolve_user(store, user_id).await?;

    let filter = query.filter();
    debug!(?filter);

    let exercises = store.find_exercises(&user.id, &filter).await?;
    Ok(ExerciseLog::new(user, exercises))
}
