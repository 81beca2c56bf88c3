use crate::http::{
    handler::{delete_user, health_check, register_user, show_user, show_user_list, update_user},
    registry::AppRegistry,
};
use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

pub fn build_user_routers() -> Router<AppRegistry> {
    let users_routers = Router::new()
        .route("/", get(show_user_list).post(register_user))
        .route(
            "/:user_id",
            get(show_user)
                .put(update_user)
                .patch(update_user)
                .delete(delete_user),
        );

    Router::new().nest("/users", users_routers)
}

pub fn build_health_check_routers() -> Router<AppRegistry> {
    Router::new().route("/health", get(health_check))
}

/// The complete application: `/api/users/...`, `/health`, request tracing.
pub fn routes(registry: AppRegistry) -> Router {
    Router::new()
        .merge(build_health_check_routers())
        .nest("/api", build_user_routers())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(registry)
}
