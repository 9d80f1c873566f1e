use std::ops::Deref;

mod comment;
mod like;
mod post;

pub use comment::{CommentRow, CreateCommentInput};
pub use like::LikeEvent;
pub use post::{CreatePostInput, PostRow};

#[derive(Clone)]
pub struct Command(pub community_shared::State);

impl Deref for Command {
    type Target = community_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
