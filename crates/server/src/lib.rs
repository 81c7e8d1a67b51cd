use axum::{handler::HandlerWithoutStateExt, Router};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod cli;
pub mod db;
pub mod routes;
pub mod service;
pub mod store;

mod errors;
pub use errors::*;

mod payload;
pub use payload::*;

mod state;
pub use state::*;

use crate::cli::Cli;

async fn not_found() -> AppError {
    AppError::not_found()
}

/// Builds the full application: the api routes, the index page and static
/// files, with anything else answered by a plain text 404
pub fn app(state: AppState, args: &Cli) -> Router {
    let static_files =
        ServeDir::new(&args.public_dir).not_found_service(not_found.into_service());

    Router::new()
        .merge(routes::router())
        .route_service("/", ServeFile::new(args.views_dir.join("index.html")))
        .fallback_service(static_files)
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(args.max_body_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
