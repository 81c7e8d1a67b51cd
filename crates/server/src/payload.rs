use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::AppError;

/// Request body that is either json or url encoded form data, depending on
/// the content type
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .is_some_and(|mime| {
            mime.type_() == "application"
                && (mime.subtype() == "json" || mime.suffix().is_some_and(|name| name == "json"))
        })
}

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if has_json_content_type(req.headers()) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::new(e.status(), e.body_text()))?;
            Ok(Payload(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::new(e.status(), e.body_text()))?;
            Ok(Payload(value))
        }
    }
}
