mod comment;
mod comment_like;
mod post;
mod post_like;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "community",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        post::CreateTable,
        post::CreateIdx1,
        post::CreateIdx2,
        comment::CreateTable,
        comment::CreateIdx1,
        comment::CreateIdx2,
        comment::CreateIdx3,
        post_like::CreateTable,
        post_like::CreateUk1,
        post_like::CreateIdx1,
        post_like::CreateIdx2,
        comment_like::CreateTable,
        comment_like::CreateUk1,
        comment_like::CreateIdx1,
        comment_like::CreateIdx2
    ]
);
