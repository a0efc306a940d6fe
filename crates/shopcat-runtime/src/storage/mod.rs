//! Key-value persistence for user preferences.
//!
//! Each key is an independent entry holding an opaque string. Callers own
//! the encoding and decide what a missing or unreadable value means.

mod fs;
mod memory;

pub use fs::FileStore;
pub use memory::MemoryStore;

use crate::Result;

pub trait KeyValueStore: Clone {
    /// `Ok(None)` when the key has never been written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Durable once this returns `Ok`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(crate::Error::Storage(format!("invalid key '{}'", key)))
    }
}
