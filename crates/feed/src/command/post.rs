use community_db::table::Post;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use crate::repository;

#[derive(Deserialize, Validate)]
pub struct CreatePostInput {
    #[validate(length(min = 1, max = 10000))]
    pub content: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PostRow {
    pub id: String,
    pub author_id: String,
    pub content: String,
    #[serde(serialize_with = "community_shared::serialize_timestamp")]
    pub created_at: i64,
}

impl super::Command {
    pub async fn create_post(
        &self,
        author_id: impl Into<String>,
        input: CreatePostInput,
        at: OffsetDateTime,
    ) -> community_shared::Result<PostRow> {
        input.validate()?;

        if input.content.trim().is_empty() {
            community_shared::bail!("Content must not be blank");
        }

        let author_id = author_id.into();
        if !repository::user_exists(&self.read_db, &author_id).await? {
            community_shared::not_found!("User not found");
        }

        let row = PostRow {
            id: ulid::Ulid::new().to_string(),
            author_id,
            content: input.content,
            created_at: community_shared::unix_millis(at),
        };

        let statement = Query::insert()
            .into_table(Post::Table)
            .columns([Post::Id, Post::AuthorId, Post::Content, Post::CreatedAt])
            .values_panic([
                row.id.to_owned().into(),
                row.author_id.to_owned().into(),
                row.content.to_owned().into(),
                row.created_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        tracing::debug!(post.id = %row.id, post.author_id = %row.author_id, "post created");

        Ok(row)
    }
}
