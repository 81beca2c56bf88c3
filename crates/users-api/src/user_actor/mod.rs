//! # User Actor
//!
//! The User resource actor: an in-memory store of [`User`] entities with
//! list, create, read, update and delete.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use users_api::model::UserCreate;
//! use users_api::store::UserStore;
//! use users_api::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!
//!     // No dependencies, so the context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let params = UserCreate {
//!         name: "Alice".to_string(),
//!         email: "alice@example.com".to_string(),
//!     };
//!     let user = client.insert(params).await?;
//!     assert_eq!(user.id.0, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **No dependencies**: `Context = ()`
//! - **Sequential IDs**: allocated by the actor starting at 1, never reused
//! - **Validated writes**: blank `name` or `email` is rejected with [`UserError::Validation`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use resource_actor::ResourceActor;

/// Creates a new User actor and its client.
///
/// `buffer_size` bounds the number of requests queued for the actor.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = UserClient::new(generic_client);

    (actor, client)
}
