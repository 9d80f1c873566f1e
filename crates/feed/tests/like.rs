use community_feed::{CreateCommentInput, CreatePostInput};
use community_shared::{Error, like::Target};
use temp_dir::TempDir;
use time::OffsetDateTime;

mod helpers;

async fn create_post(
    cmd: &community_feed::Command,
    author_id: &str,
) -> anyhow::Result<community_feed::PostRow> {
    Ok(cmd
        .create_post(
            author_id,
            CreatePostInput {
                content: "hello".to_owned(),
            },
            OffsetDateTime::now_utc(),
        )
        .await?)
}

#[tokio::test]
async fn like_post_once() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = community_feed::Command(state.clone());
    let alice = helpers::create_user(&state, "alice").await?;
    let bob = helpers::create_user(&state, "bob").await?;
    let post = create_post(&cmd, &alice).await?;

    let now = OffsetDateTime::now_utc();
    let event = cmd
        .record_like(&bob, Target::Post(post.id.to_owned()), now)
        .await?;

    assert_eq!(event.user_id, bob);
    assert_eq!(event.target, Target::Post(post.id.to_owned()));
    assert_eq!(event.created_at, community_shared::unix_millis(now));

    let err = cmd
        .record_like(&bob, Target::Post(post.id.to_owned()), now)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Conflict(_)));
    assert_eq!(err.to_string(), "You already liked this post");
    assert_eq!(helpers::count(&state, "post_like").await?, 1);

    Ok(())
}

#[tokio::test]
async fn like_comment_once() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = community_feed::Command(state.clone());
    let alice = helpers::create_user(&state, "alice").await?;
    let bob = helpers::create_user(&state, "bob").await?;
    let post = create_post(&cmd, &alice).await?;
    let comment = cmd
        .create_comment(
            &alice,
            CreateCommentInput {
                post_id: post.id.to_owned(),
                parent_id: None,
                content: "first".to_owned(),
            },
            OffsetDateTime::now_utc(),
        )
        .await?;

    let target = Target::Comment(comment.id.to_owned());
    cmd.record_like(&bob, target.clone(), OffsetDateTime::now_utc())
        .await?;
    let err = cmd
        .record_like(&bob, target.clone(), OffsetDateTime::now_utc())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "You already liked this comment");

    // the same user liking the post is a different target
    cmd.record_like(&bob, Target::Post(post.id), OffsetDateTime::now_utc())
        .await?;
    // and another user liking the comment is a different pair
    cmd.record_like(&alice, target, OffsetDateTime::now_utc())
        .await?;

    assert_eq!(helpers::count(&state, "comment_like").await?, 2);
    assert_eq!(helpers::count(&state, "post_like").await?, 1);

    Ok(())
}

#[tokio::test]
async fn concurrent_likes_store_one_row() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = community_feed::Command(state.clone());
    let alice = helpers::create_user(&state, "alice").await?;
    let bob = helpers::create_user(&state, "bob").await?;
    let post = create_post(&cmd, &alice).await?;

    let attempts = (0..8).map(|_| {
        cmd.record_like(
            &bob,
            Target::Post(post.id.to_owned()),
            OffsetDateTime::now_utc(),
        )
    });
    let results = futures::future::join_all(attempts).await;

    let succeeded = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(Error::Conflict(_))))
        .count();

    assert_eq!(succeeded, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(helpers::count(&state, "post_like").await?, 1);

    Ok(())
}

#[tokio::test]
async fn like_missing_target() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = community_feed::Command(state.clone());
    let bob = helpers::create_user(&state, "bob").await?;

    let err = cmd
        .record_like(&bob, Target::Post("missing".to_owned()), OffsetDateTime::now_utc())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(err.to_string(), "Post not found");

    let err = cmd
        .record_like(
            &bob,
            Target::Comment("missing".to_owned()),
            OffsetDateTime::now_utc(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Comment not found");

    assert_eq!(helpers::count(&state, "post_like").await?, 0);
    assert_eq!(helpers::count(&state, "comment_like").await?, 0);

    Ok(())
}

#[tokio::test]
async fn like_by_missing_user() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = community_feed::Command(state.clone());
    let alice = helpers::create_user(&state, "alice").await?;
    let post = create_post(&cmd, &alice).await?;

    let err = cmd
        .record_like("ghost", Target::Post(post.id), OffsetDateTime::now_utc())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "User not found");

    Ok(())
}
