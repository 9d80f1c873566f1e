use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] community_shared::Error),

    #[error("{0}")]
    Unauthorized(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        use community_shared::Error;

        match self {
            AppError::Unauthorized(msg) => {
                tracing::debug!("Unauthorized: {msg}");
                (StatusCode::UNAUTHORIZED, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Domain(Error::NotFound(msg)) => {
                tracing::debug!("Not found: {msg}");
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Domain(Error::Conflict(msg)) => {
                tracing::debug!("Conflict: {msg}");
                (StatusCode::BAD_REQUEST, Json(json!({ "message": msg }))).into_response()
            }
            AppError::Domain(e @ (Error::Validate(_) | Error::Invalid(_))) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response(),
            AppError::Domain(Error::Unknown(e)) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(err: impl Into<AppError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn test_status_codes() {
        use community_shared::Error;

        assert_eq!(
            status(Error::NotFound("Post not found".to_owned())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(Error::Conflict("You already liked this post".to_owned())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(Error::Invalid("Content must not be blank".to_owned())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status(Error::Unknown(anyhow::anyhow!("disk on fire"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status(AppError::Unauthorized("Invalid token".to_owned())),
            StatusCode::UNAUTHORIZED
        );
    }
}
