use const_format::concatcp;

pub mod error;
pub mod payloads;

mod object;
pub use object::*;

pub const API_BASE_PATH: &str = "/api/";
pub const EXERCISE_BASE_PATH: &str = concatcp!(API_BASE_PATH, "exercise/");
