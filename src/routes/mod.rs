use axum::{
    Router,
    routing::{get, post},
};
use sqlx::SqlitePool;

mod health;
mod leaderboard;
mod likes;
mod posts;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub feed_command: community_feed::Command,
    pub feed_query: community_feed::Query,
    pub user_query: community_user::Query,
    pub karma_query: community_karma::Query,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: crate::config::Config, state: community_shared::State) -> Self {
        Self {
            config,
            feed_command: community_feed::Command(state.clone()),
            feed_query: community_feed::Query(state.clone()),
            user_query: community_user::Query(state.clone()),
            karma_query: community_karma::Query(state.clone()),
            pool: state.read_db,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    let mut api = Router::new();

    // every endpoint answers with and without the trailing slash
    for suffix in ["/", ""] {
        api = api
            .route(
                &format!("/api/posts{suffix}"),
                get(posts::list).post(posts::create),
            )
            .route(
                &format!("/api/posts/{{post_id}}/comments{suffix}"),
                post(posts::comment),
            )
            .route(
                &format!("/api/posts/{{post_id}}/like{suffix}"),
                post(likes::like_post),
            )
            .route(
                &format!("/api/comments/{{comment_id}}/like{suffix}"),
                post(likes::like_comment),
            )
            .route(
                &format!("/api/leaderboard{suffix}"),
                get(leaderboard::list),
            );
    }

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .merge(
            api.route("/", get(health::index))
                .with_state(app_state),
        )
}
