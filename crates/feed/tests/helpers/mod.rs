use std::{path::PathBuf, str::FromStr};

use community_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    community_db::migrate(&pool).await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub async fn create_user(state: &State, name: impl Into<String>) -> anyhow::Result<String> {
    let user = community_user::Command(state.clone())
        .create(community_user::CreateInput {
            username: name.into(),
        })
        .await?;

    Ok(user.id)
}

#[allow(dead_code)]
pub async fn count(state: &State, table: &str) -> anyhow::Result<i64> {
    Ok(sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(&state.read_db)
        .await?)
}
