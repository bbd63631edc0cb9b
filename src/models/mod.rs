mod comment;
mod post;

pub use comment::Comment;
pub use post::Post;

use chrono::{DateTime, Local};

/// Shown in place of an author who left the name field blank.
pub const ANONYMOUS: &str = "Anônimo";

/// pt-BR style `dd/mm/yyyy, HH:MM:SS`.
pub const DATE_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

pub fn author_or_anonymous(author: &str) -> String {
    let author = author.trim();
    if author.is_empty() {
        ANONYMOUS.to_string()
    } else {
        author.to_string()
    }
}

pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(DATE_FORMAT).to_string()
}
