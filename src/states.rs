use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    board::Board,
    view::{self, Drafts, ViewState},
};

/// Everything one open board needs: the persisted posts and the
/// presentation flags that only live as long as the process.
pub struct Session {
    pub board: Board,
    pub view: ViewState,
}

impl Session {
    pub fn render(&self, drafts: &Drafts<'_>) -> askama::Result<String> {
        view::render(self.board.posts(), &self.view, drafts)
    }
}

// ============================================================================
// APPLICATION STATE - Shared with every handler
// ============================================================================
/// The session sits behind one async `Mutex`: each event locks it, runs the
/// whole mutate-persist-render cycle and only then lets the next one in.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(board: Board) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session {
                board,
                view: ViewState::new(),
            })),
        }
    }
}
