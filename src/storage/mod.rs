//! Key-value slots the board persists into.
//!
//! A slot holds one serialized blob and is overwritten wholesale on every
//! write, the same contract a browser's local storage offers.

mod file;
#[cfg(test)]
mod memory;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Invalid slot key: {0:?}")]
    InvalidKey(String),

    #[error("No id left after {0}")]
    IdsExhausted(i64),
}

/// Synchronous key-value slot storage.
pub trait KeyValueStore: Send {
    /// Read the value held under `key`, `None` if the slot was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value held under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
