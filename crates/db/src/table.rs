use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Username,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Post {
    Table,
    Id,
    AuthorId,
    Content,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Comment {
    Table,
    Id,
    PostId,
    AuthorId,
    ParentId,
    Content,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum PostLike {
    Table,
    Id,
    UserId,
    PostId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum CommentLike {
    Table,
    Id,
    UserId,
    CommentId,
    CreatedAt,
}
