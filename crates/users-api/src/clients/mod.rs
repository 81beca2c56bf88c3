//! Domain clients that hide the generic message passing behind typed APIs.

pub mod user_client;

pub use user_client::UserClient;
