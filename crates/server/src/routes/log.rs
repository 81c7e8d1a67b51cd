use axum::{extract::Query, Json};
use shared::api::payloads::{ExerciseLog, LogQuery};
use tracing::instrument;

use crate::{service, AppError, Store};

#[instrument]
pub async fn log(store: Store, Query(query): Query<LogQuery>) -> Result<Json<ExerciseLog>, AppError> {
    Ok(Json(service::fetch_log(&*store, query).await?))
}
