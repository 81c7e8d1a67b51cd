use chrono::NaiveDate;
use shared::{
    api::{
        error::ApiError,
        payloads::{AddExerciseRequest, ExerciseAdded},
    },
    model::Exercise,
};
use tracing::{info, instrument};

use super::resolve_user;
use crate::store::RecordStore;

/// Records an exercise for an existing user. `today` is used when the request
/// has no usable date
#[instrument(skip(store))]
pub async fn record_exercise(
    store: &dyn RecordStore,
    request: AddExerciseRequest,
    today: NaiveDate,
) -> Result<ExerciseAdded, ApiError> {
    let submission = request.validate(today)?;
    let user = resolve_user(store, &submission.user_id).await?;

    let exercise = store
        .insert_exercise(Exercise::new(
            user.id,
            submission.description,
            submission.duration,
            submission.date,
        ))
        .await?;
    info!(id = %exercise.id, user_id = %user.id, "Recorded exercise");

    Ok(ExerciseAdded::new(&user, &exercise))
}
