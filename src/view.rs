//! HTML rendering of the board.
//!
//! Templates live in `templates/` and are compiled by askama. Their `.html`
//! extension turns on escaping for every `{{ }}` expression, so user text
//! can never become markup.

use std::collections::HashSet;

use askama::Template;

use crate::{
    board::Board,
    dto::{CreateCommentForm, CreatePostForm},
    models::{Comment, Post},
};

/// Presentation-only state. Never persisted.
#[derive(Debug, Default)]
pub struct ViewState {
    expanded: HashSet<i64>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the comment section of `post_id` and returns whether it is now
    /// visible, or `None` if the board has no such post.
    pub fn toggle_comments_visibility(&mut self, board: &Board, post_id: i64) -> Option<bool> {
        board.post(post_id)?;
        if self.expanded.remove(&post_id) {
            Some(false)
        } else {
            self.expanded.insert(post_id);
            Some(true)
        }
    }

    pub fn show_comments(&mut self, post_id: i64) {
        self.expanded.insert(post_id);
    }

    pub fn is_visible(&self, post_id: i64) -> bool {
        self.expanded.contains(&post_id)
    }
}

/// Form values to put back into the page after a rejected submission.
#[derive(Debug, Default)]
pub struct Drafts<'a> {
    pub post: Option<&'a CreatePostForm>,
    pub comment: Option<(i64, &'a CreateCommentForm)>,
}

#[derive(Template)]
#[template(path = "board.html")]
struct BoardPage<'a> {
    post_draft: PostDraft<'a>,
    posts: Vec<PostView<'a>>,
}

#[derive(Default)]
struct PostDraft<'a> {
    title: &'a str,
    content: &'a str,
    author: &'a str,
}

struct PostView<'a> {
    id: i64,
    title: &'a str,
    content: &'a str,
    author: &'a str,
    created_at: &'a str,
    comments_label: String,
    visible: bool,
    draft_content: &'a str,
    draft_author: &'a str,
    comments: &'a [Comment],
}

/// Renders the whole page: new-post form, then every post in the given order.
pub fn render(posts: &[Post], view: &ViewState, drafts: &Drafts<'_>) -> askama::Result<String> {
    let post_draft = drafts
        .post
        .map(|form| PostDraft {
            title: &form.title,
            content: &form.content,
            author: &form.author,
        })
        .unwrap_or_default();

    let posts = posts
        .iter()
        .map(|post| {
            let draft = drafts
                .comment
                .filter(|(id, _)| *id == post.id)
                .map(|(_, form)| form);
            PostView {
                id: post.id,
                title: &post.title,
                content: &post.content,
                author: &post.author,
                created_at: &post.created_at,
                comments_label: post.comments_label(),
                visible: view.is_visible(post.id) || draft.is_some(),
                draft_content: draft.map(|f| f.content.as_str()).unwrap_or_default(),
                draft_author: draft.map(|f| f.author.as_str()).unwrap_or_default(),
                comments: &post.comments,
            }
        })
        .collect();

    BoardPage { post_draft, posts }.render()
}
