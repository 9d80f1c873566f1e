use std::{path::PathBuf, str::FromStr};

use community_feed::{CreateCommentInput, CreatePostInput};
use community_shared::{State, like::Target};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use time::OffsetDateTime;

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    community_db::migrate(&pool).await?;

    Ok(State::single(pool))
}

/// Fixed clock used by every karma test.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
}

pub async fn create_user(state: &State, name: impl Into<String>) -> anyhow::Result<String> {
    let user = community_user::Command(state.clone())
        .create(community_user::CreateInput {
            username: name.into(),
        })
        .await?;

    Ok(user.id)
}

pub async fn create_users(state: &State, prefix: &str, n: usize) -> anyhow::Result<Vec<String>> {
    let mut ids = vec![];
    for i in 0..n {
        ids.push(create_user(state, format!("{prefix}{i}")).await?);
    }

    Ok(ids)
}

pub async fn create_post(state: &State, author_id: &str) -> anyhow::Result<String> {
    let post = community_feed::Command(state.clone())
        .create_post(
            author_id,
            CreatePostInput {
                content: "post".to_owned(),
            },
            now(),
        )
        .await?;

    Ok(post.id)
}

pub async fn create_comment(
    state: &State,
    author_id: &str,
    post_id: &str,
) -> anyhow::Result<String> {
    let comment = community_feed::Command(state.clone())
        .create_comment(
            author_id,
            CreateCommentInput {
                post_id: post_id.to_owned(),
                parent_id: None,
                content: "comment".to_owned(),
            },
            now(),
        )
        .await?;

    Ok(comment.id)
}

pub async fn like(
    state: &State,
    user_id: &str,
    target: Target,
    at: OffsetDateTime,
) -> anyhow::Result<()> {
    community_feed::Command(state.clone())
        .record_like(user_id, target, at)
        .await?;

    Ok(())
}

/// Has each of `likers` like `target` once at `at`.
pub async fn like_all(
    state: &State,
    likers: &[String],
    target: Target,
    at: OffsetDateTime,
) -> anyhow::Result<()> {
    for user_id in likers {
        like(state, user_id, target.clone(), at).await?;
    }

    Ok(())
}
