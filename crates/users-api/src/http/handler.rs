use crate::http::{
    error::{AppError, AppResult},
    model::{CreateUserRequest, UpdateUserRequest, UserParams, UserResponse},
    registry::AppRegistry,
};
use crate::model::UserId;
use crate::user_actor::UserError;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

pub async fn show_user_list(State(registry): State<AppRegistry>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = registry.user_store().list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn show_user(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_store()
        .find(user_id)
        .await?
        .map(|user| Json(user.into()))
        .ok_or_else(|| AppError::from(UserError::NotFound(user_id.to_string())))
}

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<UserParams<CreateUserRequest>>,
) -> AppResult<impl IntoResponse> {
    let user = registry
        .user_store()
        .insert(req.into_inner().into())
        .await?;

    let location = format!("/api/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(user)),
    ))
}

pub async fn update_user(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UserParams<UpdateUserRequest>>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_store()
        .update(user_id, req.into_inner().into())
        .await
        .map(|user| Json(user.into()))
        .map_err(AppError::from)
}

pub async fn delete_user(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry.user_store().delete(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
