use axum::{
    routing::{get, post},
    Router,
};
use shared::api::Object;

use crate::AppState;

pub mod exercises;
pub mod log;
pub mod ping;
pub mod users;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(Object::NewUser.path(), post(users::new_user))
        .route(Object::Users.path(), get(users::users))
        .route(Object::AddExercise.path(), post(exercises::add))
        .route(Object::Log.path(), get(log::log))
        .route(Object::Ping.path(), get(ping::ping))
}
