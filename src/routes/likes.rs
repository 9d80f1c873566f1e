use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use community_shared::like::Target;
use serde_json::{Value, json};
use time::OffsetDateTime;

use crate::{auth::AuthUser, error::AppError, routes::AppState};

async fn like(
    state: AppState,
    auth: AuthUser,
    target: Target,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let event = state
        .feed_command
        .record_like(auth.user_id, target, OffsetDateTime::now_utc())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": format!("{} liked successfully", event.target.kind()) })),
    ))
}

/// POST /api/posts/{post_id}/like/
pub async fn like_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    auth: AuthUser,
) -> Result<(StatusCode, Json<Value>), AppError> {
    like(state, auth, Target::Post(post_id)).await
}

/// POST /api/comments/{comment_id}/like/
pub async fn like_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    auth: AuthUser,
) -> Result<(StatusCode, Json<Value>), AppError> {
    like(state, auth, Target::Comment(comment_id)).await
}
