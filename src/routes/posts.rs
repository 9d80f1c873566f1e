use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use community_feed::{CommentRow, CreateCommentInput, CreatePostInput, PostRow, PostView};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{auth::AuthUser, error::AppError, routes::AppState};

/// GET /api/posts/ - every post with its comment tree and like counts
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PostView>>, AppError> {
    Ok(Json(state.feed_query.list_posts().await?))
}

#[tracing::instrument(skip(state, input), fields(user_id = %auth.user_id))]
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreatePostInput>,
) -> Result<(StatusCode, Json<PostRow>), AppError> {
    let post = state
        .feed_command
        .create_post(auth.user_id, input, OffsetDateTime::now_utc())
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

#[derive(Deserialize)]
pub struct CommentBody {
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

#[tracing::instrument(skip(state, body), fields(user_id = %auth.user_id))]
pub async fn comment(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    auth: AuthUser,
    Json(body): Json<CommentBody>,
) -> Result<(StatusCode, Json<CommentRow>), AppError> {
    let input = CreateCommentInput {
        post_id,
        parent_id: body.parent_id,
        content: body.content,
    };

    let comment = state
        .feed_command
        .create_comment(auth.user_id, input, OffsetDateTime::now_utc())
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}
