use std::ops::Deref;

mod aggregate;
mod leaderboard;

pub use aggregate::KarmaBreakdown;
pub use leaderboard::{LeaderboardEntry, RankedUser, rank};

/// Karma earned by each like on a post the user authored.
pub const POST_LIKE_WEIGHT: i64 = 5;

/// Karma earned by each like on a comment the user authored.
pub const COMMENT_LIKE_WEIGHT: i64 = 1;

/// Trailing window over which likes count toward karma.
pub const KARMA_WINDOW: time::Duration = time::Duration::hours(24);

/// Leaderboard length when none is configured.
pub const DEFAULT_LEADERBOARD_SIZE: usize = 5;

#[derive(Clone)]
pub struct Query(pub community_shared::State);

impl Deref for Query {
    type Target = community_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
