use axum::async_trait;
use deadpool_sqlite::Pool;
use rusqlite::{ffi, Connection};
use shared::{
    filter::LogFilter,
    model::{Exercise, NewUser, User},
    types::Uuid,
};
use tracing::instrument;

use super::{RecordStore, StoreError};

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            // Message has the form "UNIQUE constraint failed: user.username"
            rusqlite::Error::SqliteFailure(ref e, Some(ref message))
                if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                let field = message
                    .rsplit('.')
                    .next()
                    .unwrap_or_default()
                    .to_owned();
                StoreError::UniqueViolation { field }
            },
            e => StoreError::Backend(e.to_string()),
        }
    }
}

/// Runs each operation on a pooled connection's blocking thread
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: Pool,
}

impl SqliteStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    async fn interact<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, rusqlite::Error> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self
            .pool
            .get()
            .await
            .map_err(|e| StoreError::Backend(format!("Pool::get: {e}")))?;

        let result = conn
            .interact(f)
            .await
            .map_err(|e| StoreError::Backend(format!("Object::interact: {e}")))?;

        Ok(result?)
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    #[instrument(skip(self))]
    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        self.interact(move |conn| User::create(conn, new_user)).await
    }

    #[instrument(skip(self))]
    async fn find_user(&self, id: &Uuid) -> Result<Option<User>, StoreError> {
        let id = *id;
        self.interact(move |conn| User::fetch_by_id(conn, &id)).await
    }

    #[instrument(skip(self))]
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let username = username.to_owned();
        self.interact(move |conn| User::fetch_by_username(conn, username))
            .await
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.interact(|conn| User::fetch_all(conn)).await
    }

    #[instrument(skip(self))]
    async fn insert_exercise(&self, exercise: Exercise) -> Result<Exercise, StoreError> {
        self.interact(move |conn| {
            exercise.create(conn)?;
            Ok(exercise)
        })
        .await
    }

    #[instrument(skip(self))]
    async fn find_exercises(
        &self,
        user_id: &Uuid,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, StoreError> {
        let (user_id, filter) = (*user_id, *filter);
        self.interact(move |conn| Exercise::fetch_log(conn, &user_id, &filter))
            .await
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use shared::{filter::LogFilter, model::{Exercise, NewUser}};
    use tempfile::TempDir;
    use tokio_test::assert_err;

    use super::*;
    use crate::{db, store::MemoryStore};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sqlite_store(dir: &TempDir) -> SqliteStore {
        let path = dir.path().join("test.sqlite");
        let path = path.to_str().unwrap();
        db::run_migrations(path).unwrap();
        SqliteStore::new(db::create_pool(path).unwrap())
    }

    #[tokio::test]
    async fn test_duplicate_username_is_unique_violation() {
        let dir = TempDir::new().unwrap();
        let store = sqlite_store(&dir);

        store.insert_user(NewUser::new("alice")).await.unwrap();
        let err = assert_err!(store.insert_user(NewUser::new("alice")).await);
        assert_eq!(err, StoreError::UniqueViolation { field: "username".into() });
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_same_results_as_memory_store() {
        let dir = TempDir::new().unwrap();
        let stores: [Box<dyn RecordStore>; 2] = [Box::new(sqlite_store(&dir)), Box::new(MemoryStore::new())];

        let filters = [
            LogFilter::default(),
            LogFilter::build(Some("2020-01-01"), Some("2020-12-31"), None),
            LogFilter::build(Some("2020-01-01"), Some("2020-12-31"), Some("1")),
            LogFilter::build(None, Some("2020-06-15"), Some("0")),
            LogFilter::build(Some("2021-01-01"), None, Some("nope")),
            LogFilter::build(None, None, Some("10000000000000000000")),
        ];

        let mut results = Vec::new();
        for store in &stores {
            let alice = store.insert_user(NewUser::new("alice")).await.unwrap();
            let other = store.insert_user(NewUser::new("other")).await.unwrap();

            for (description, date) in [
                ("a", ymd(2020, 12, 31)),
                ("b", ymd(2019, 12, 31)),
                ("c", ymd(2020, 1, 1)),
                ("d", ymd(2021, 1, 1)),
                ("e", ymd(2020, 6, 15)),
            ] {
                store.insert_exercise(Exercise::new(alice.id, description, 30, date)).await.unwrap();
                store.insert_exercise(Exercise::new(other.id, description, 30, date)).await.unwrap();
            }

            let mut per_filter = Vec::new();
            for filter in &filters {
                let log = store.find_exercises(&alice.id, filter).await.unwrap();
                assert!(log.iter().all(|e| e.user_id == alice.id));
                per_filter.push(log.into_iter().map(|e| (e.description, e.date)).collect::<Vec<_>>());
            }
            results.push(per_filter);
        }

        assert_eq!(results[0], results[1]);
        assert_eq!(results[0][2], vec![("a".to_owned(), ymd(2020, 12, 31))]);
        assert!(results[0][3].is_empty());
        assert_eq!(results[0][5].len(), 5);
    }
}
