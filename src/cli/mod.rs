pub mod leaderboard;
pub mod migrate;
pub mod server;
pub mod user;
