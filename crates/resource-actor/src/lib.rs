//! # Resource Actor
//!
//! Building blocks for keeping a collection of entities behind an actor and
//! exposing it as a **resource**: list, create, read, update, delete.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the domain type, its payloads and its invariants
//! 2. **Runtime Layer** ([`ResourceActor`]) - the task that owns the store and serves requests
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe, cloneable access
//!
//! You write the business logic once in the entity; the framework handles the
//! message passing, ID allocation, validation gating and logging.
//!
//! ## Writes Are Validated
//!
//! Before a create or update is committed the actor calls
//! [`ActorEntity::validate`]. A non-empty [`Violations`] aborts the write with
//! [`FrameworkError::Invalid`] and the store is left exactly as it was. Updates
//! are applied to a copy, so a rejected update never leaks into the stored
//! entity.
//!
//! ```rust
//! use resource_actor::{ActorEntity, FrameworkError, ResourceActor, Violations};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Tag { id: u64, label: String }
//!
//! #[derive(Debug)] struct TagCreate { label: String }
//! #[derive(Debug)] struct TagUpdate { label: Option<String> }
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! #[async_trait]
//! impl ActorEntity for Tag {
//!     type Id = u64;
//!     type Create = TagCreate;
//!     type Update = TagUpdate;
//!     type Context = ();
//!     type Error = TagError;
//!
//!     fn from_create_params(id: u64, params: TagCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, label: params.label })
//!     }
//!
//!     fn validate(&self) -> Violations {
//!         let mut violations = Violations::new();
//!         violations.require_present("label", &self.label);
//!         violations
//!     }
//!
//!     async fn on_update(&mut self, update: TagUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(label) = update.label { self.label = label; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Tag>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let tag = client.create(TagCreate { label: "rust".into() }).await.unwrap();
//!     assert_eq!(tag.id, 1);
//!
//!     let rejected = client.update(tag.id, TagUpdate { label: Some("".into()) }).await;
//!     assert!(matches!(rejected, Err(FrameworkError::Invalid(_))));
//!     assert_eq!(client.get(tag.id).await.unwrap().unwrap().label, "rust");
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Requests are processed **sequentially** within an actor (no locks needed)
//! - Clients are cheap to clone and can be shared freely between tasks
//! - The actor stops once every client has been dropped
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted
//! expectations, so code built on a client can be tested without an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;
pub mod validation;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use validation::{Violation, Violations};
