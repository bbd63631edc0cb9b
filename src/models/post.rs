use serde::{Deserialize, Serialize};

use super::Comment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Already formatted for display, stored verbatim.
    #[serde(rename = "date")]
    pub created_at: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Label of the button that opens the comment section.
    pub fn comments_label(&self) -> String {
        match self.comments.len() {
            0 => "Comentar".to_string(),
            n => format!("{} comentário(s)", n),
        }
    }

    /// Largest id used by this post or any of its comments.
    pub fn max_id(&self) -> i64 {
        self.comments
            .iter()
            .map(|c| c.id)
            .fold(self.id, i64::max)
    }
}
