use crate::user_actor::UserError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use resource_actor::Violations;
use serde_json::json;
use thiserror::Error;

/// Errors a handler can return; each maps to one HTTP status.
#[derive(Debug, Error)]
pub enum AppError {
    /// 422, body `{"errors": {<field>: [<message>, ...]}}`.
    #[error("unprocessable entity: {0}")]
    UnprocessableEntity(Violations),
    /// 404, body `{"error": <message>}`.
    #[error("{0}")]
    EntityNotFound(String),
    /// 500, body `{"error": <message>}`.
    #[error("store error: {0}")]
    StoreError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::Validation(violations) => AppError::UnprocessableEntity(violations),
            UserError::NotFound(_) => AppError::EntityNotFound(e.to_string()),
            UserError::ActorCommunicationError(_) => AppError::StoreError(e.to_string()),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::UnprocessableEntity(violations) => {
                tracing::debug!(%violations, "Rejected invalid user");
                json!({ "errors": violations })
            }
            AppError::EntityNotFound(message) => {
                tracing::debug!(%message, "Not found");
                json!({ "error": message })
            }
            AppError::StoreError(message) => {
                tracing::error!(error.message = %message, "Unexpected store error");
                json!({ "error": message })
            }
        };
        (status, Json(body)).into_response()
    }
}
