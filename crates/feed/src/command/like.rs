use community_db::table::{CommentLike, PostLike};
use community_shared::like::{Target, TargetKind};
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;

use crate::repository;

#[derive(Clone, Debug, PartialEq)]
pub struct LikeEvent {
    pub id: String,
    pub user_id: String,
    pub target: Target,
    pub created_at: i64,
}

fn not_found(kind: TargetKind) -> community_shared::Error {
    community_shared::Error::NotFound(format!("{kind} not found"))
}

fn already_liked(kind: TargetKind) -> community_shared::Error {
    let kind = match kind {
        TargetKind::Post => "post",
        TargetKind::Comment => "comment",
    };

    community_shared::Error::Conflict(format!("You already liked this {kind}"))
}

impl super::Command {
    /// Records a like of `target` by `user_id`.
    ///
    /// At most one like exists per (user, target). The insert runs first in its
    /// transaction and relies on the unique index, so concurrent attempts on the
    /// same pair resolve to one success and `Conflict` for the rest.
    pub async fn record_like(
        &self,
        user_id: impl Into<String>,
        target: Target,
        at: OffsetDateTime,
    ) -> community_shared::Result<LikeEvent> {
        let user_id = user_id.into();
        let kind = target.kind();

        let target_exists = match &target {
            Target::Post(id) => repository::post_exists(&self.read_db, id).await?,
            Target::Comment(id) => repository::find_comment(&self.read_db, id)
                .await?
                .is_some(),
        };

        if !target_exists {
            return Err(not_found(kind));
        }

        if !repository::user_exists(&self.read_db, &user_id).await? {
            community_shared::not_found!("User not found");
        }

        let event = LikeEvent {
            id: ulid::Ulid::new().to_string(),
            user_id,
            target,
            created_at: community_shared::unix_millis(at),
        };

        let statement = match &event.target {
            Target::Post(post_id) => Query::insert()
                .into_table(PostLike::Table)
                .columns([
                    PostLike::Id,
                    PostLike::UserId,
                    PostLike::PostId,
                    PostLike::CreatedAt,
                ])
                .values_panic([
                    event.id.to_owned().into(),
                    event.user_id.to_owned().into(),
                    post_id.to_owned().into(),
                    event.created_at.into(),
                ])
                .to_owned(),
            Target::Comment(comment_id) => Query::insert()
                .into_table(CommentLike::Table)
                .columns([
                    CommentLike::Id,
                    CommentLike::UserId,
                    CommentLike::CommentId,
                    CommentLike::CreatedAt,
                ])
                .values_panic([
                    event.id.to_owned().into(),
                    event.user_id.to_owned().into(),
                    comment_id.to_owned().into(),
                    event.created_at.into(),
                ])
                .to_owned(),
        };

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let mut tx = self.write_db.begin().await?;

        match sqlx::query_with(&sql, values).execute(&mut *tx).await {
            Ok(_) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                tracing::debug!(
                    user.id = %event.user_id,
                    like.kind = %kind,
                    like.target = %event.target.id(),
                    "duplicate like rejected"
                );

                return Err(already_liked(kind));
            }
            // target or actor removed between the existence check and the insert
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
                return Err(not_found(kind));
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit().await?;

        tracing::debug!(
            like.id = %event.id,
            user.id = %event.user_id,
            like.kind = %kind,
            like.target = %event.target.id(),
            "like recorded"
        );

        Ok(event)
    }
}
