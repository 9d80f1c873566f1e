use community_db::table::User;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(FromRow, Serialize, Clone, Debug, PartialEq)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub created_at: i64,
}

pub enum FindType {
    Id(String),
    Username(String),
}

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> community_shared::Result<Option<UserRow>> {
    let mut statement = Query::select()
        .columns([User::Id, User::Username, User::CreatedAt])
        .from(User::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(User::Id).eq(id)),
        FindType::Username(username) => statement.and_where(Expr::col(User::Username).eq(username)),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn find_many(
    pool: &SqlitePool,
    ids: Vec<String>,
) -> community_shared::Result<Vec<UserRow>> {
    if ids.is_empty() {
        return Ok(vec![]);
    }

    let statement = Query::select()
        .columns([User::Id, User::Username, User::CreatedAt])
        .from(User::Table)
        .and_where(Expr::col(User::Id).is_in(ids))
        .order_by(User::Id, Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn create(
    pool: &SqlitePool,
    id: String,
    username: String,
    created_at: i64,
) -> Result<(), sqlx::Error> {
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([User::Id, User::Username, User::CreatedAt])
        .values_panic([id.into(), username.into(), created_at.into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
