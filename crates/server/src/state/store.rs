use std::{convert::Infallible, ops::Deref, sync::Arc};

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::store::RecordStore;

/// Extracts the record store handle from the app state
#[derive(Debug, Clone)]
pub struct Store(pub Arc<dyn RecordStore>);

impl From<Arc<dyn RecordStore>> for Store {
    fn from(store: Arc<dyn RecordStore>) -> Self {
        Store(store)
    }
}

impl Deref for Store {
    type Target = dyn RecordStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Store
where
    S: Send + Sync,
    Arc<dyn RecordStore>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(<Arc<dyn RecordStore>>::from_ref(state).into())
    }
}
