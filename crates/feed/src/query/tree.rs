use std::collections::HashMap;

use super::feed::{AuthorView, CommentRecord, CommentView};

struct Node {
    record: CommentRecord,
    children: Vec<usize>,
}

/// Assembles flat comment rows into per-post reply trees.
///
/// `comments` must already be in display order; siblings keep that order.
/// Rows are held in an arena and materialised bottom-up, so depth never
/// touches the call stack. Rows whose parent is missing or sits on another
/// post are dropped.
pub(super) fn build(
    comments: Vec<CommentRecord>,
    like_counts: &HashMap<String, i64>,
) -> HashMap<String, Vec<CommentView>> {
    let index = comments
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id.to_owned(), i))
        .collect::<HashMap<_, _>>();

    let mut arena = comments
        .into_iter()
        .map(|record| Node {
            record,
            children: vec![],
        })
        .collect::<Vec<_>>();

    let mut roots = vec![];
    for i in 0..arena.len() {
        let Some(parent_id) = arena[i].record.parent_id.as_deref() else {
            roots.push(i);
            continue;
        };

        match index.get(parent_id) {
            Some(&parent) if arena[parent].record.post_id == arena[i].record.post_id => {
                arena[parent].children.push(i);
            }
            _ => {
                tracing::debug!(comment.id = %arena[i].record.id, "skipping orphaned reply");
            }
        }
    }

    // pre-order walk: every child lands after its parent
    let mut order = Vec::with_capacity(arena.len());
    let mut stack = roots.iter().rev().copied().collect::<Vec<_>>();
    while let Some(i) = stack.pop() {
        order.push(i);
        stack.extend(arena[i].children.iter().rev().copied());
    }

    let mut built: Vec<Option<CommentView>> = (0..arena.len()).map(|_| None).collect();
    for &i in order.iter().rev() {
        let replies = arena[i]
            .children
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();

        let record = &arena[i].record;
        built[i] = Some(CommentView {
            id: record.id.to_owned(),
            author: AuthorView {
                id: record.author_id.to_owned(),
                username: record.username.to_owned(),
            },
            content: record.content.to_owned(),
            created_at: record.created_at,
            like_count: like_counts.get(&record.id).copied().unwrap_or(0),
            replies,
        });
    }

    let mut trees: HashMap<String, Vec<CommentView>> = HashMap::new();
    for i in roots {
        if let Some(view) = built[i].take() {
            trees
                .entry(arena[i].record.post_id.to_owned())
                .or_default()
                .push(view);
        }
    }

    trees
}
