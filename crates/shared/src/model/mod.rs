mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

/// Insertion order of the sqlite tables
const NATURAL_ORDER: &str = "rowid";

#[cfg(test)]
pub(crate) fn test_connection() -> rusqlite::Connection {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(include_str!("../../../server/migrations/001-user/up.sql"))
        .unwrap();
    conn.execute_batch(include_str!("../../../server/migrations/002-exercise/up.sql"))
        .unwrap();
    conn
}
