use std::str::FromStr;

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use temp_dir::TempDir;

async fn setup(dir: &TempDir) -> anyhow::Result<SqlitePool> {
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    community_db::migrate(&pool).await?;

    sqlx::query("INSERT INTO user (id, username, created_at) VALUES ('u1', 'alice', 0), ('u2', 'bob', 0)")
        .execute(&pool)
        .await?;
    sqlx::query("INSERT INTO post (id, author_id, content, created_at) VALUES ('p1', 'u1', 'hi', 0)")
        .execute(&pool)
        .await?;
    sqlx::query("INSERT INTO comment (id, post_id, author_id, parent_id, content, created_at) VALUES ('c1', 'p1', 'u2', NULL, 'yo', 0)")
        .execute(&pool)
        .await?;

    Ok(pool)
}

fn is_unique_violation(err: sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(e) if e.is_unique_violation())
}

#[tokio::test]
async fn migrate_is_idempotent() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = setup(&dir).await?;

    community_db::migrate(&pool).await?;

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user")
        .fetch_one(&pool)
        .await?;
    assert_eq!(users, 2);

    Ok(())
}

#[tokio::test]
async fn one_like_per_user_and_target() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = setup(&dir).await?;

    sqlx::query("INSERT INTO post_like (id, user_id, post_id, created_at) VALUES ('l1', 'u2', 'p1', 0)")
        .execute(&pool)
        .await?;
    let err = sqlx::query("INSERT INTO post_like (id, user_id, post_id, created_at) VALUES ('l2', 'u2', 'p1', 1)")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(is_unique_violation(err));

    sqlx::query("INSERT INTO comment_like (id, user_id, comment_id, created_at) VALUES ('l3', 'u1', 'c1', 0)")
        .execute(&pool)
        .await?;
    let err = sqlx::query("INSERT INTO comment_like (id, user_id, comment_id, created_at) VALUES ('l4', 'u1', 'c1', 1)")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(is_unique_violation(err));

    // another user may still like the same post
    sqlx::query("INSERT INTO post_like (id, user_id, post_id, created_at) VALUES ('l5', 'u1', 'p1', 0)")
        .execute(&pool)
        .await?;

    Ok(())
}

#[tokio::test]
async fn usernames_are_unique() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = setup(&dir).await?;

    let err = sqlx::query("INSERT INTO user (id, username, created_at) VALUES ('u3', 'alice', 0)")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(is_unique_violation(err));

    Ok(())
}

#[tokio::test]
async fn likes_reference_existing_rows() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = setup(&dir).await?;

    let err = sqlx::query("INSERT INTO post_like (id, user_id, post_id, created_at) VALUES ('l1', 'u2', 'missing', 0)")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(matches!(err, sqlx::Error::Database(e) if e.is_foreign_key_violation()));

    Ok(())
}

#[tokio::test]
async fn deleting_a_post_removes_its_comments_and_likes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = setup(&dir).await?;

    sqlx::query("INSERT INTO post_like (id, user_id, post_id, created_at) VALUES ('l1', 'u2', 'p1', 0)")
        .execute(&pool)
        .await?;
    sqlx::query("INSERT INTO comment_like (id, user_id, comment_id, created_at) VALUES ('l2', 'u1', 'c1', 0)")
        .execute(&pool)
        .await?;

    sqlx::query("DELETE FROM post WHERE id = 'p1'")
        .execute(&pool)
        .await?;

    for table in ["comment", "post_like", "comment_like"] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 0, "{table}");
    }

    Ok(())
}
