//! # ActorEntity Trait
//!
//! The contract every resource must satisfy to be stored by a
//! [`ResourceActor`](crate::ResourceActor). Associated types pin down the ID,
//! the create and update payloads, the injected context and the error type,
//! so a `User` actor can only ever receive `User` payloads.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.
//! - [`ActorEntity::validate`] defaults to "always valid".
//!
//! Only [`ActorEntity::from_create_params`] and [`ActorEntity::on_update`] are required.

use crate::validation::Violations;
use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they can call other actors. The `Context` type is
/// injected into every hook by [`ResourceActor::run`](crate::ResourceActor::run),
/// which lets dependencies be wired after construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Built from the actor's `u64` counter; `Ord` keeps listings in creation order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Checks the entity's invariants. Called before every write; a
    /// non-empty result aborts the write and leaves the store untouched.
    fn validate(&self) -> Violations {
        Violations::new()
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is validated and stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update. The actor calls this on a copy of the stored entity
    /// and only commits the copy if it is still valid.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
