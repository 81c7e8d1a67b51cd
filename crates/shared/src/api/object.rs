use const_format::concatcp;

use crate::api::{API_BASE_PATH, EXERCISE_BASE_PATH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    NewUser,
    AddExercise,
    Users,
    Log,
    Ping,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            NewUser => concatcp!(EXERCISE_BASE_PATH, "new-user"),
            AddExercise => concatcp!(EXERCISE_BASE_PATH, "add"),
            Users => concatcp!(EXERCISE_BASE_PATH, "users"),
            Log => concatcp!(EXERCISE_BASE_PATH, "log"),
            Ping => concatcp!(API_BASE_PATH, "ping"),
        }
    }
}
