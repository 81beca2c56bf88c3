//! HTTP surface: routes, handlers, request/response bodies and error mapping.

pub mod error;
pub mod handler;
pub mod model;
pub mod registry;
pub mod route;

pub use registry::AppRegistry;
pub use route::routes;
