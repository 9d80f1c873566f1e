use std::collections::HashMap;

use community_db::table::{Comment, CommentLike, Post, PostLike, User};
use sea_query::{Expr, ExprTrait, Func, Iden, JoinType, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

use super::tree;

#[derive(Iden)]
enum Aggregate {
    LikeCount,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AuthorView {
    pub id: String,
    pub username: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CommentView {
    pub id: String,
    pub author: AuthorView,
    pub content: String,
    #[serde(serialize_with = "community_shared::serialize_timestamp")]
    pub created_at: i64,
    pub like_count: i64,
    pub replies: Vec<CommentView>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PostView {
    pub id: String,
    pub author: AuthorView,
    pub content: String,
    #[serde(serialize_with = "community_shared::serialize_timestamp")]
    pub created_at: i64,
    pub like_count: i64,
    pub comments: Vec<CommentView>,
}

#[derive(FromRow)]
struct PostRecord {
    id: String,
    author_id: String,
    username: String,
    content: String,
    created_at: i64,
}

#[derive(FromRow)]
pub(super) struct CommentRecord {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub username: String,
    pub parent_id: Option<String>,
    pub content: String,
    pub created_at: i64,
}

#[derive(FromRow)]
struct LikeCount {
    id: String,
    like_count: i64,
}

impl super::Query {
    /// Every post, newest first, with authors, like counts and comment trees.
    ///
    /// Issues exactly four statements whatever the number of posts and comments.
    pub async fn list_posts(&self) -> community_shared::Result<Vec<PostView>> {
        let posts = fetch_posts(&self.read_db).await?;
        if posts.is_empty() {
            return Ok(vec![]);
        }

        // the page holds every post, so the remaining reads need no id filter
        let comments = fetch_comments(&self.read_db).await?;
        let post_likes = fetch_post_like_counts(&self.read_db).await?;
        let comment_likes = fetch_comment_like_counts(&self.read_db).await?;

        let mut trees = tree::build(comments, &comment_likes);

        Ok(posts
            .into_iter()
            .map(|post| PostView {
                like_count: post_likes.get(&post.id).copied().unwrap_or(0),
                comments: trees.remove(&post.id).unwrap_or_default(),
                author: AuthorView {
                    id: post.author_id,
                    username: post.username,
                },
                id: post.id,
                content: post.content,
                created_at: post.created_at,
            })
            .collect())
    }
}

async fn fetch_posts(pool: &SqlitePool) -> community_shared::Result<Vec<PostRecord>> {
    let statement = sea_query::Query::select()
        .columns([
            (Post::Table, Post::Id),
            (Post::Table, Post::AuthorId),
            (Post::Table, Post::Content),
            (Post::Table, Post::CreatedAt),
        ])
        .column((User::Table, User::Username))
        .from(Post::Table)
        .join(
            JoinType::InnerJoin,
            User::Table,
            Expr::col((User::Table, User::Id)).equals((Post::Table, Post::AuthorId)),
        )
        .order_by((Post::Table, Post::CreatedAt), Order::Desc)
        .order_by((Post::Table, Post::Id), Order::Desc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, PostRecord, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

async fn fetch_comments(pool: &SqlitePool) -> community_shared::Result<Vec<CommentRecord>> {
    let statement = sea_query::Query::select()
        .columns([
            (Comment::Table, Comment::Id),
            (Comment::Table, Comment::PostId),
            (Comment::Table, Comment::AuthorId),
            (Comment::Table, Comment::ParentId),
            (Comment::Table, Comment::Content),
            (Comment::Table, Comment::CreatedAt),
        ])
        .column((User::Table, User::Username))
        .from(Comment::Table)
        .join(
            JoinType::InnerJoin,
            User::Table,
            Expr::col((User::Table, User::Id)).equals((Comment::Table, Comment::AuthorId)),
        )
        .order_by((Comment::Table, Comment::CreatedAt), Order::Asc)
        .order_by((Comment::Table, Comment::Id), Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, CommentRecord, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

async fn fetch_post_like_counts(
    pool: &SqlitePool,
) -> community_shared::Result<HashMap<String, i64>> {
    let statement = sea_query::Query::select()
        .expr_as(Expr::col(PostLike::PostId), Post::Id)
        .expr_as(Func::count(Expr::col(PostLike::Id)), Aggregate::LikeCount)
        .from(PostLike::Table)
        .group_by_col(PostLike::PostId)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    let rows = sqlx::query_as_with::<_, LikeCount, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|r| (r.id, r.like_count)).collect())
}

async fn fetch_comment_like_counts(
    pool: &SqlitePool,
) -> community_shared::Result<HashMap<String, i64>> {
    let statement = sea_query::Query::select()
        .expr_as(Expr::col(CommentLike::CommentId), Comment::Id)
        .expr_as(Func::count(Expr::col(CommentLike::Id)), Aggregate::LikeCount)
        .from(CommentLike::Table)
        .group_by_col(CommentLike::CommentId)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    let rows = sqlx::query_as_with::<_, LikeCount, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|r| (r.id, r.like_count)).collect())
}
