use std::sync::Arc;

use axum::async_trait;
use shared::{
    filter::LogFilter,
    model::{Exercise, NewUser, User},
    types::Uuid,
};
use tokio::sync::RwLock;
use tracing::instrument;

use super::{RecordStore, StoreError};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    exercises: Vec<Exercise>,
}

/// Keeps records in insertion order behind a single lock
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(Arc<RwLock<Tables>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    #[instrument(skip(self))]
    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.0.write().await;
        if tables.users.iter().any(|u| u.username == new_user.username) {
            return Err(StoreError::UniqueViolation {
                field: "username".to_owned(),
            });
        }
        let user = User::from(new_user);
        tables.users.push(user.clone());
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_user(&self, id: &Uuid) -> Result<Option<User>, StoreError> {
        let tables = self.0.read().await;
        Ok(tables.users.iter().find(|u| &u.id == id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.0.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.0.read().await.users.clone())
    }

    #[instrument(skip(self))]
    async fn insert_exercise(&self, exercise: Exercise) -> Result<Exercise, StoreError> {
        self.0.write().await.exercises.push(exercise.clone());
        Ok(exercise)
    }

    #[instrument(skip(self))]
    async fn find_exercises(
        &self,
        user_id: &Uuid,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, StoreError> {
        let tables = self.0.read().await;
        let owned = tables.exercises.iter().filter(|e| &e.user_id == user_id).cloned();
        Ok(filter.apply(owned, |e| e.date))
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use shared::{filter::LogFilter, model::{Exercise, NewUser}};
    use tokio_test::{assert_err, assert_ok};

    use super::*;

    #[tokio::test]
    async fn test_usernames_are_unique() {
        let store = MemoryStore::new();
        assert_ok!(store.insert_user(NewUser::new("alice")).await);
        let err = assert_err!(store.insert_user(NewUser::new("alice")).await);
        assert_eq!(err, StoreError::UniqueViolation { field: "username".into() });
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_finds_users() {
        let store = MemoryStore::new();
        let alice = store.insert_user(NewUser::new("alice")).await.unwrap();
        assert_eq!(store.find_user(&alice.id).await.unwrap(), Some(alice.clone()));
        assert_eq!(store.find_user_by_username("alice").await.unwrap(), Some(alice));
        assert_eq!(store.find_user(&Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_exercises_are_scoped_to_user() {
        let store = MemoryStore::new();
        let alice = store.insert_user(NewUser::new("alice")).await.unwrap();
        let bob = store.insert_user(NewUser::new("bob")).await.unwrap();
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

        store.insert_exercise(Exercise::new(alice.id, "run", 30, date)).await.unwrap();
        store.insert_exercise(Exercise::new(bob.id, "swim", 30, date)).await.unwrap();
        store.insert_exercise(Exercise::new(alice.id, "walk", 30, date)).await.unwrap();

        let log = store.find_exercises(&alice.id, &LogFilter::default()).await.unwrap();
        let descriptions: Vec<_> = log.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, ["run", "walk"]);
    }
}
