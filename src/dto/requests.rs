use serde::Deserialize;
use validator::Validate;

/// Body of the new-post form. Fields are trimmed before validation.
#[derive(Debug, Default, Validate, Deserialize)]
pub struct CreatePostForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

/// Body of a post's inline comment form.
#[derive(Debug, Default, Validate, Deserialize)]
pub struct CreateCommentForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Comment is required"))]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

impl CreatePostForm {
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            author: self.author.trim().to_string(),
        }
    }
}

impl CreateCommentForm {
    pub fn trimmed(self) -> Self {
        Self {
            content: self.content.trim().to_string(),
            author: self.author.trim().to_string(),
        }
    }
}
