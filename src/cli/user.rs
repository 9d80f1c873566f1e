use community::Config;

pub async fn create(config: Config, username: String) -> anyhow::Result<()> {
    let pool = community::db::create_pool(&config.database.url, 1).await?;
    community_db::migrate(&pool).await?;

    let user = community_user::Command(community_shared::State::single(pool))
        .create(community_user::CreateInput { username })
        .await?;

    println!("{}", user.id);

    Ok(())
}

pub async fn token(config: Config, username: String) -> anyhow::Result<()> {
    let pool = community::db::create_pool(&config.database.url, 1).await?;
    let query = community_user::Query(community_shared::State::single(pool));

    let Some(user) = query.find_by_username(&username).await? else {
        anyhow::bail!("user {username} not found");
    };

    let token = community::auth::generate_token(
        user.id,
        &config.jwt.secret,
        config.jwt.expiration_days,
    )?;

    println!("{token}");

    Ok(())
}
