use std::collections::HashMap;

use community_shared::unix_millis;
use serde::Serialize;
use sqlx::prelude::FromRow;
use time::OffsetDateTime;

use crate::{COMMENT_LIKE_WEIGHT, POST_LIKE_WEIGHT};

#[derive(Serialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct KarmaBreakdown {
    pub post_karma: i64,
    pub comment_karma: i64,
}

impl KarmaBreakdown {
    pub fn total(&self) -> i64 {
        self.post_karma + self.comment_karma
    }
}

#[derive(FromRow)]
struct LikeTally {
    user_id: String,
    post_likes: i64,
    comment_likes: i64,
}

// Each like table is grouped by author in its own derived table before the
// join, so a user's post likes and comment likes never multiply each other.
const KARMA_SQL: &str = r#"
SELECT u.id AS user_id,
       COALESCE(pl.likes, 0) AS post_likes,
       COALESCE(cl.likes, 0) AS comment_likes
FROM user u
LEFT JOIN (
    SELECT p.author_id, COUNT(*) AS likes
    FROM post_like l
    INNER JOIN post p ON p.id = l.post_id
    WHERE l.created_at >= ?1 AND l.created_at < ?2
    GROUP BY p.author_id
) pl ON pl.author_id = u.id
LEFT JOIN (
    SELECT c.author_id, COUNT(*) AS likes
    FROM comment_like l
    INNER JOIN comment c ON c.id = l.comment_id
    WHERE l.created_at >= ?1 AND l.created_at < ?2
    GROUP BY c.author_id
) cl ON cl.author_id = u.id
WHERE pl.likes IS NOT NULL OR cl.likes IS NOT NULL
"#;

impl super::Query {
    /// Weighted likes received per user over `[window_start, now)`.
    ///
    /// Users without a qualifying like are absent from the map.
    pub async fn compute_karma(
        &self,
        window_start: OffsetDateTime,
        now: OffsetDateTime,
    ) -> community_shared::Result<HashMap<String, KarmaBreakdown>> {
        if window_start >= now {
            return Ok(HashMap::new());
        }

        let (start, end) = (unix_millis(window_start), unix_millis(now));
        let rows = sqlx::query_as::<_, LikeTally>(KARMA_SQL)
            .bind(start)
            .bind(end)
            .fetch_all(&self.read_db)
            .await?;

        tracing::debug!(
            window.start = start,
            window.end = end,
            users = rows.len(),
            "karma aggregated"
        );

        Ok(rows
            .into_iter()
            .map(|row| {
                let karma = KarmaBreakdown {
                    post_karma: row.post_likes * POST_LIKE_WEIGHT,
                    comment_karma: row.comment_likes * COMMENT_LIKE_WEIGHT,
                };

                (row.user_id, karma)
            })
            .collect())
    }
}
