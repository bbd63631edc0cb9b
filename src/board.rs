use chrono::{Local, Utc};
use tracing::{debug, info, warn};

use crate::{
    models::{Comment, Post, author_or_anonymous, format_timestamp},
    storage::{KeyValueStore, StoreError},
};

/// Slot the whole post collection is serialized into.
pub const SLOT_KEY: &str = "forumPosts";

pub const SEED_TITLE: &str = "Bem-vindo ao Fórum de Lendas";
pub const SEED_CONTENT: &str = "Este é um espaço para discutir os sites mais misteriosos e lendários da internet. Compartilhe suas experiências, teorias e histórias sobre lugares digitais que desafiam a compreensão.";
pub const SEED_AUTHOR: &str = "Ronny";

/// The post collection and the slot it is mirrored into.
///
/// Posts are kept newest-first, comments oldest-first. Every successful
/// mutation rewrites the full collection to the slot before returning; a
/// failed write undoes the mutation.
pub struct Board {
    posts: Vec<Post>,
    store: Box<dyn KeyValueStore>,
    slot: String,
    last_id: i64,
}

impl Board {
    /// Loads the collection from `slot`, seeding the welcome post when the
    /// slot is missing or holds no posts. Unparseable data is returned as an
    /// error and the slot is left as it was.
    pub fn load_or_initialize(
        store: Box<dyn KeyValueStore>,
        slot: &str,
    ) -> Result<Self, StoreError> {
        let posts: Vec<Post> = match store.get(slot)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        let last_id = posts.iter().map(Post::max_id).max().unwrap_or(0);

        let mut board = Self {
            posts,
            store,
            slot: slot.to_string(),
            last_id,
        };
        info!("Loaded {} post(s) from slot {}", board.len(), board.slot);

        if board.is_empty() {
            info!("Board is empty, inserting welcome post");
            board.create_post(SEED_TITLE, SEED_CONTENT, SEED_AUTHOR)?;
        }

        Ok(board)
    }

    /// Adds a post at the front of the collection.
    ///
    /// Returns `Ok(None)` without touching anything when the trimmed title or
    /// content is empty.
    pub fn create_post(
        &mut self,
        title: &str,
        content: &str,
        author: &str,
    ) -> Result<Option<Post>, StoreError> {
        let (title, content) = (title.trim(), content.trim());
        if title.is_empty() || content.is_empty() {
            debug!("Ignoring post with empty title or content");
            return Ok(None);
        }

        let post = Post {
            id: self.next_id()?,
            title: title.to_string(),
            content: content.to_string(),
            author: author_or_anonymous(author),
            created_at: format_timestamp(Local::now()),
            comments: Vec::new(),
        };

        self.posts.insert(0, post.clone());
        if let Err(e) = self.persist() {
            self.posts.remove(0);
            return Err(e);
        }

        info!("Post created: {} by {}", post.id, post.author);
        Ok(Some(post))
    }

    /// Appends a comment to the post with `post_id`.
    ///
    /// Returns `Ok(None)` when the trimmed content is empty or no such post
    /// exists.
    pub fn add_comment(
        &mut self,
        post_id: i64,
        content: &str,
        author: &str,
    ) -> Result<Option<Comment>, StoreError> {
        let content = content.trim();
        if content.is_empty() {
            debug!("Ignoring empty comment on post {}", post_id);
            return Ok(None);
        }

        let Some(index) = self.posts.iter().position(|p| p.id == post_id) else {
            warn!("Comment target post {} not found, ignoring", post_id);
            return Ok(None);
        };

        let comment = Comment {
            id: self.next_id()?,
            content: content.to_string(),
            author: author_or_anonymous(author),
            created_at: format_timestamp(Local::now()),
        };

        self.posts[index].comments.push(comment.clone());
        if let Err(e) = self.persist() {
            self.posts[index].comments.pop();
            return Err(e);
        }

        info!("Comment created: {} on post {}", comment.id, post_id);
        Ok(Some(comment))
    }

    /// Writes the whole collection to the slot, replacing what was there.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.posts)?;
        self.store.set(&self.slot, &raw)?;
        debug!("Persisted {} post(s) to slot {}", self.posts.len(), self.slot);
        Ok(())
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    // Millisecond timestamps, bumped past the last issued id so two entities
    // created within the same millisecond still differ.
    fn next_id(&mut self) -> Result<i64, StoreError> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted(self.last_id))?;
        let id = Utc::now().timestamp_millis().max(next);
        self.last_id = id;
        Ok(id)
    }
}
