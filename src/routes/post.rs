use crate::{
    AppState,
    dto::{CreateCommentForm, CreatePostForm},
    errors::ApiError,
    states::Session,
    view::Drafts,
};
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{debug, warn};
use validator::Validate;

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let session = state.session.lock().await;

    Ok(Html(session.render(&Drafts::default())?))
}

/// POST /posts
/// Form: title, content, author (optional)
///
/// An empty title or content re-renders the page with the form still filled
/// in; a stored post redirects to the top of a cleared page.
pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<CreatePostForm>,
) -> Result<Response, ApiError> {
    let form = form.trimmed();
    let mut session = state.session.lock().await;

    if let Err(e) = form.validate() {
        debug!("New post rejected: {}", e);
        let drafts = Drafts {
            post: Some(&form),
            comment: None,
        };
        return Ok(Html(session.render(&drafts)?).into_response());
    }

    session
        .board
        .create_post(&form.title, &form.content, &form.author)?;

    Ok(Redirect::to("/").into_response())
}

/// POST /posts/{id}/comments
/// Form: content, author (optional)
///
/// Unknown posts are ignored. The post's comment section stays open either
/// way.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<CreateCommentForm>,
) -> Result<Response, ApiError> {
    let form = form.trimmed();
    let mut session = state.session.lock().await;

    if session.board.post(id).is_none() {
        warn!("Comment for unknown post {} ignored", id);
        return Ok(Redirect::to("/").into_response());
    }

    if let Err(e) = form.validate() {
        debug!("Comment on post {} rejected: {}", id, e);
        let drafts = Drafts {
            post: None,
            comment: Some((id, &form)),
        };
        return Ok(Html(session.render(&drafts)?).into_response());
    }

    session.board.add_comment(id, &form.content, &form.author)?;
    session.view.show_comments(id);

    Ok(Redirect::to(&format!("/#comments-{}", id)).into_response())
}

/// POST /posts/{id}/toggle
///
/// Opening a section jumps to it so the browser scrolls it into view.
pub async fn toggle_comments(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    let mut session = state.session.lock().await;
    let Session { board, view } = &mut *session;

    match view.toggle_comments_visibility(board, id) {
        Some(true) => Redirect::to(&format!("/#comments-{}", id)),
        Some(false) => Redirect::to(&format!("/#post-{}", id)),
        None => Redirect::to("/"),
    }
}
