//! # User Client
//!
//! Wraps a `ResourceClient<User>` and exposes it as a [`UserStore`].
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::store::UserStore;
use crate::user_actor::UserError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}

#[async_trait]
impl UserStore for UserClient {
    async fn list(&self) -> Result<Vec<User>, UserError> {
        ActorClient::list(self).await
    }

    async fn find(&self, id: UserId) -> Result<Option<User>, UserError> {
        ActorClient::get(self, id).await
    }

    #[instrument(skip(self))]
    async fn insert(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(UserError::from)
    }

    #[instrument(skip(self))]
    async fn update(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(UserError::from)
    }

    async fn delete(&self, id: UserId) -> Result<(), UserError> {
        ActorClient::delete(self, id).await
    }
}
