use axum::{Json, extract::State};
use community_karma::LeaderboardEntry;
use time::OffsetDateTime;

use crate::{error::AppError, routes::AppState};

/// GET /api/leaderboard/ - top users by karma over the last 24 hours
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let entries = state
        .karma_query
        .top_karma(state.config.leaderboard.size, OffsetDateTime::now_utc())
        .await?;

    Ok(Json(entries))
}
