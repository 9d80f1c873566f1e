use std::ops::Deref;

mod feed;
mod tree;

pub use feed::{AuthorView, CommentView, PostView};

#[derive(Clone)]
pub struct Query(pub community_shared::State);

impl Deref for Query {
    type Target = community_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
