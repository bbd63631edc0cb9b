mod requests;

pub use requests::{CreateCommentForm, CreatePostForm};
