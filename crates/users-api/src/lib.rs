//! # Users API
//!
//! A REST resource for `User` records (`name`, `email`) backed by a
//! [`resource_actor::ResourceActor`].
//!
//! | Action  | Request                  | Success | Failure  |
//! |---------|--------------------------|---------|----------|
//! | index   | `GET /api/users`         | 200     |          |
//! | show    | `GET /api/users/{id}`    | 200     | 404      |
//! | create  | `POST /api/users`        | 201     | 422      |
//! | update  | `PUT/PATCH /api/users/{id}` | 200  | 422, 404 |
//! | destroy | `DELETE /api/users/{id}` | 204     | 404      |
//!
//! ## Layers
//!
//! - [`model`]: the [`User`](model::User) entity and its payloads
//! - [`user_actor`]: the entity implementation, errors and actor factory
//! - [`clients`]: [`UserClient`](clients::UserClient), the typed client
//! - [`store`]: the [`UserStore`](store::UserStore) capability handlers depend on
//! - [`http`]: axum routes, handlers and error mapping
//! - [`lifecycle`]: starting and stopping the actor
//! - [`config`]: command line / environment configuration

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod store;
pub mod user_actor;
