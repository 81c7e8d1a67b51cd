//! Request and response bodies for the exercise api.
//!
//! Requests arrive either form encoded or as json, so every request field is
//! optional text at the wire level and is validated into a typed command
//! afterwards.

use serde::{Deserialize, Deserializer};

mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

mod log;
pub use log::*;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// Accepts a string or a json scalar and keeps it as text
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|value| match value {
        Scalar::Text(v) => v,
        Scalar::Integer(v) => v.to_string(),
        Scalar::Float(v) => v.to_string(),
        Scalar::Bool(v) => v.to_string(),
    }))
}

/// Trimmed value, or `None` when absent or blank
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
