use shared::{
    api::{error::ApiError, payloads::NewUserRequest},
    model::User,
};
use tracing::{debug, info, instrument};

use crate::store::RecordStore;

#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    Created(User),
    /// The username belongs to an existing user, nothing was written
    Taken,
}

#[instrument(skip(store))]
pub async fn register_user(
    store: &dyn RecordStore,
    request: NewUserRequest,
) -> Result<Registration, ApiError> {
    let new_user = request.validate()?;

    if store.find_user_by_username(&new_user.username).await?.is_some() {
        debug!(username = new_user.username, "Username already taken");
        return Ok(Registration::Taken);
    }

    let user = store.insert_user(new_user).await?;
    info!(id = %user.id, username = user.username, "Registered user");
    Ok(Registration::Created(user))
}

#[instrument(skip(store))]
pub async fn list_users(store: &dyn RecordStore) -> Result<Vec<User>, ApiError> {
    Ok(store.list_users().await?)
}

#[cfg(test)]
mod test {
    use axum::{async_trait, http::StatusCode};
    use shared::{
        api::{
            error::{ApiError, USERNAME_TAKEN},
            payloads::NewUserRequest,
        },
        filter::LogFilter,
        model::{Exercise, NewUser},
        types::Uuid,
    };
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::store::{MemoryStore, StoreError};

    /// Misses the username on lookup, then loses the insert to another writer
    #[derive(Debug)]
    struct LostRaceStore;

    #[async_trait]
    impl RecordStore for LostRaceStore {
        async fn insert_user(&self, _new_user: NewUser) -> Result<User, StoreError> {
            Err(StoreError::UniqueViolation {
                field: "username".into(),
            })
        }

        async fn find_user(&self, _id: &Uuid) -> Result<Option<User>, StoreError> {
            Ok(None)
        }

        async fn find_user_by_username(&self, _username: &str) -> Result<Option<User>, StoreError> {
            Ok(None)
        }

        async fn list_users(&self) -> Result<Vec<User>, StoreError> {
            Ok(Vec::new())
        }

        async fn insert_exercise(&self, exercise: Exercise) -> Result<Exercise, StoreError> {
            Ok(exercise)
        }

        async fn find_exercises(
            &self,
            _user_id: &Uuid,
            _filter: &LogFilter,
        ) -> Result<Vec<Exercise>, StoreError> {
            Ok(Vec::new())
        }
    }

    fn request(username: &str) -> NewUserRequest {
        NewUserRequest {
            username: Some(username.to_owned()),
        }
    }

    #[tokio::test]
    async fn test_register_creates_user() {
        let store = MemoryStore::new();
        let registration = assert_ok!(register_user(&store, request("alice")).await);

        let user = match registration {
            Registration::Created(user) => user,
            Registration::Taken => panic!("Expected a new user"),
        };
        assert_eq!(user.username, "alice");
        assert_eq!(list_users(&store).await.unwrap(), vec![user]);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_taken() {
        let store = MemoryStore::new();
        register_user(&store, request("alice")).await.unwrap();

        let registration = register_user(&store, request(" alice ")).await.unwrap();
        assert_eq!(registration, Registration::Taken);
        assert_eq!(list_users(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_username() {
        let store = MemoryStore::new();
        let err = register_user(&store, NewUserRequest::default()).await.unwrap_err();
        assert_eq!(err, ApiError::missing("username"));
        assert!(list_users(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_losing_insert_race_is_validation_error() {
        let err = assert_err!(register_user(&LostRaceStore, request("alice")).await);
        assert_eq!(
            err,
            ApiError::Validation {
                message: USERNAME_TAKEN.into()
            }
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
