use community::Config;
use time::OffsetDateTime;

pub async fn print(config: Config, size: Option<usize>) -> anyhow::Result<()> {
    let size = size.unwrap_or(config.leaderboard.size);
    let pool = community::db::create_pool(&config.database.url, 1).await?;

    let entries = community_karma::Query(community_shared::State::single(pool))
        .top_karma(size, OffsetDateTime::now_utc())
        .await?;

    if entries.is_empty() {
        println!("No karma earned in the last 24 hours");
    }

    for (rank, entry) in entries.iter().enumerate() {
        println!(
            "{:>2}. {:<30} {:>6}",
            rank + 1,
            entry.username,
            entry.karma_last_24h
        );
    }

    Ok(())
}
