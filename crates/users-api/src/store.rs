//! # User Store
//!
//! The persistence capability the HTTP layer depends on. Handlers hold an
//! `Arc<dyn UserStore>` and never see the actor behind it, so any store with
//! the same contract can be injected through the
//! [`AppRegistry`](crate::http::registry::AppRegistry).

use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;

/// Persistence contract for [`User`] records.
///
/// Writes are validated by the store: `insert` and `update` fail with
/// [`UserError::Validation`] and change nothing when the resulting record
/// would have a blank `name` or `email`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every stored user, in creation order.
    async fn list(&self) -> Result<Vec<User>, UserError>;

    /// The user with `id`, if any.
    async fn find(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Stores a new user and returns it with its assigned id.
    async fn insert(&self, params: UserCreate) -> Result<User, UserError>;

    /// Applies a partial update and returns the committed record.
    async fn update(&self, id: UserId, update: UserUpdate) -> Result<User, UserError>;

    /// Removes the user with `id`.
    async fn delete(&self, id: UserId) -> Result<(), UserError>;
}
