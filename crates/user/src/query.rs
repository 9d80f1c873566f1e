use std::ops::Deref;

use crate::repository::{self, FindType, UserRow};

#[derive(Clone)]
pub struct Query(pub community_shared::State);

impl Deref for Query {
    type Target = community_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Query {
    pub async fn find(&self, id: impl Into<String>) -> community_shared::Result<Option<UserRow>> {
        repository::find(&self.read_db, FindType::Id(id.into())).await
    }

    pub async fn find_by_username(
        &self,
        username: impl Into<String>,
    ) -> community_shared::Result<Option<UserRow>> {
        repository::find(&self.read_db, FindType::Username(username.into())).await
    }

    /// Loads every user in `ids` in a single round-trip, ordered by id.
    pub async fn find_many(&self, ids: Vec<String>) -> community_shared::Result<Vec<UserRow>> {
        repository::find_many(&self.read_db, ids).await
    }
}
