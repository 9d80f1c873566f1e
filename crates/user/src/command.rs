use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use time::OffsetDateTime;
use validator::Validate;

use crate::repository::{self, UserRow};

static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("valid username pattern"));

#[derive(Validate)]
pub struct CreateInput {
    #[validate(length(min = 3, max = 30), regex(path = *USERNAME))]
    pub username: String,
}

#[derive(Clone)]
pub struct Command(pub community_shared::State);

impl Deref for Command {
    type Target = community_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub async fn create(&self, input: CreateInput) -> community_shared::Result<UserRow> {
        input.validate()?;

        let id = ulid::Ulid::new().to_string();
        let created_at = community_shared::unix_millis(OffsetDateTime::now_utc());

        let created = repository::create(
            &self.write_db,
            id.to_owned(),
            input.username.to_owned(),
            created_at,
        )
        .await;

        match created {
            Ok(()) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(community_shared::Error::Conflict(
                    "Username already exists".to_owned(),
                ));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(user.id = %id, user.username = %input.username, "user created");

        Ok(UserRow {
            id,
            username: input.username,
            created_at,
        })
    }
}
