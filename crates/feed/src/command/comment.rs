use community_db::table::Comment;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use time::OffsetDateTime;
use validator::Validate;

use crate::repository;

#[derive(Validate)]
pub struct CreateCommentInput {
    pub post_id: String,
    pub parent_id: Option<String>,
    #[validate(length(min = 1, max = 10000))]
    pub content: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CommentRow {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub parent_id: Option<String>,
    pub content: String,
    #[serde(serialize_with = "community_shared::serialize_timestamp")]
    pub created_at: i64,
}

impl super::Command {
    /// Adds a comment to a post, or a reply when `parent_id` is set.
    ///
    /// A reply must target a comment of the same post.
    pub async fn create_comment(
        &self,
        author_id: impl Into<String>,
        input: CreateCommentInput,
        at: OffsetDateTime,
    ) -> community_shared::Result<CommentRow> {
        input.validate()?;

        if input.content.trim().is_empty() {
            community_shared::bail!("Content must not be blank");
        }

        if !repository::post_exists(&self.read_db, &input.post_id).await? {
            community_shared::not_found!("Post not found");
        }

        if let Some(parent_id) = input.parent_id.as_deref() {
            let Some(parent) = repository::find_comment(&self.read_db, parent_id).await? else {
                community_shared::not_found!("Comment not found");
            };

            if parent.post_id != input.post_id {
                community_shared::bail!("Reply must belong to the same post as its parent");
            }
        }

        let author_id = author_id.into();
        if !repository::user_exists(&self.read_db, &author_id).await? {
            community_shared::not_found!("User not found");
        }

        let row = CommentRow {
            id: ulid::Ulid::new().to_string(),
            post_id: input.post_id,
            author_id,
            parent_id: input.parent_id,
            content: input.content,
            created_at: community_shared::unix_millis(at),
        };

        let statement = Query::insert()
            .into_table(Comment::Table)
            .columns([
                Comment::Id,
                Comment::PostId,
                Comment::AuthorId,
                Comment::ParentId,
                Comment::Content,
                Comment::CreatedAt,
            ])
            .values_panic([
                row.id.to_owned().into(),
                row.post_id.to_owned().into(),
                row.author_id.to_owned().into(),
                row.parent_id.to_owned().into(),
                row.content.to_owned().into(),
                row.created_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        tracing::debug!(comment.id = %row.id, comment.post_id = %row.post_id, "comment created");

        Ok(row)
    }
}
