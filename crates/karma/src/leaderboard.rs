use std::{cmp::Reverse, collections::HashMap};

use serde::Serialize;
use time::OffsetDateTime;

use crate::{KARMA_WINDOW, KarmaBreakdown};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub username: String,
    pub karma_last_24h: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedUser {
    pub user_id: String,
    pub karma: KarmaBreakdown,
}

/// Orders users by karma and keeps the first `k` with a positive total.
///
/// Ties on total fall back to post karma, then comment karma, then user id,
/// so equal inputs always produce the same ranking.
pub fn rank(karma: HashMap<String, KarmaBreakdown>, k: usize) -> Vec<RankedUser> {
    let mut ranked = karma
        .into_iter()
        .filter(|(_, karma)| karma.total() > 0)
        .map(|(user_id, karma)| RankedUser { user_id, karma })
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| {
        (
            Reverse(a.karma.total()),
            Reverse(a.karma.post_karma),
            Reverse(a.karma.comment_karma),
            &a.user_id,
        )
            .cmp(&(
                Reverse(b.karma.total()),
                Reverse(b.karma.post_karma),
                Reverse(b.karma.comment_karma),
                &b.user_id,
            ))
    });
    ranked.truncate(k);

    ranked
}

impl super::Query {
    /// The `k` users with the most karma over the 24 hours before `now`.
    pub async fn top_karma(
        &self,
        k: usize,
        now: OffsetDateTime,
    ) -> community_shared::Result<Vec<LeaderboardEntry>> {
        let karma = self.compute_karma(now - KARMA_WINDOW, now).await?;
        let ranked = rank(karma, k);

        let users = community_user::Query(self.0.clone())
            .find_many(ranked.iter().map(|r| r.user_id.to_owned()).collect())
            .await?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect::<HashMap<_, _>>();

        Ok(ranked
            .into_iter()
            .filter_map(|r| {
                let username = users.get(&r.user_id)?.to_owned();

                Some(LeaderboardEntry {
                    karma_last_24h: r.karma.total(),
                    user_id: r.user_id,
                    username,
                })
            })
            .collect())
    }
}
