use axum::Json;
use chrono::Local;
use shared::api::payloads::{AddExerciseRequest, ExerciseAdded};
use tracing::instrument;

use crate::{service, AppError, Payload, Store};

#[instrument]
pub async fn add(
    store: Store,
    Payload(request): Payload<AddExerciseRequest>,
) -> Result<Json<ExerciseAdded>, AppError> {
    let today = Local::now().date_naive();
    Ok(Json(service::record_exercise(&*store, request, today).await?))
}
