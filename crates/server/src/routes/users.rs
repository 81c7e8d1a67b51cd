use axum::{
    response::{IntoResponse, Response},
    Json,
};
use shared::{
    api::{error::USERNAME_TAKEN, payloads::NewUserRequest},
    model::User,
};
use tracing::instrument;

use crate::{
    service::{self, Registration},
    AppError, Payload, Store,
};

#[instrument]
pub async fn new_user(
    store: Store,
    Payload(request): Payload<NewUserRequest>,
) -> Result<Response, AppError> {
    let response = match service::register_user(&*store, request).await? {
        Registration::Created(user) => Json(user).into_response(),
        Registration::Taken => USERNAME_TAKEN.into_response(),
    };
    Ok(response)
}

#[instrument]
pub async fn users(store: Store) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(service::list_users(&*store).await?))
}
