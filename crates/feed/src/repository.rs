use community_db::table::{Comment, Post, User};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(FromRow)]
pub(crate) struct CommentRef {
    pub post_id: String,
}

pub(crate) async fn user_exists(pool: &SqlitePool, id: &str) -> community_shared::Result<bool> {
    let statement = Query::select()
        .column(User::Id)
        .from(User::Table)
        .and_where(Expr::col(User::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_with(&sql, values)
        .fetch_optional(pool)
        .await?
        .is_some())
}

pub(crate) async fn post_exists(pool: &SqlitePool, id: &str) -> community_shared::Result<bool> {
    let statement = Query::select()
        .column(Post::Id)
        .from(Post::Table)
        .and_where(Expr::col(Post::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_with(&sql, values)
        .fetch_optional(pool)
        .await?
        .is_some())
}

pub(crate) async fn find_comment(
    pool: &SqlitePool,
    id: &str,
) -> community_shared::Result<Option<CommentRef>> {
    let statement = Query::select()
        .column(Comment::PostId)
        .from(Comment::Table)
        .and_where(Expr::col(Comment::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, CommentRef, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}
