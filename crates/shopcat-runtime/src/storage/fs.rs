use super::{KeyValueStore, validate_key};
use crate::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    // Write-then-rename so a crash never leaves a half-written entry.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        std::fs::create_dir_all(&self.dir)?;

        let path = self.entry_path(key);
        let tmp_path = self.dir.join(format!(".{}.tmp", key));
        std::fs::write(&tmp_path, value)?;
        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileStore::new(temp_dir.path().join("storage"));

        assert_eq!(store.get("theme")?, None);
        Ok(())
    }

    #[test]
    fn test_set_then_get() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileStore::new(temp_dir.path().join("storage"));

        store.set("theme", "dark")?;
        assert_eq!(store.get("theme")?.as_deref(), Some("dark"));

        store.set("theme", "light")?;
        assert_eq!(store.get("theme")?.as_deref(), Some("light"));
        Ok(())
    }

    #[test]
    fn test_keys_are_independent() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileStore::new(temp_dir.path());

        store.set("theme", "dark")?;
        store.set("favorites", "[1]")?;
        store.remove("favorites")?;

        assert_eq!(store.get("favorites")?, None);
        assert_eq!(store.get("theme")?.as_deref(), Some("dark"));
        Ok(())
    }

    #[test]
    fn test_remove_missing_key_is_ok() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileStore::new(temp_dir.path());

        store.remove("never-set")?;
        Ok(())
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let store = FileStore::new("/tmp/unused");
        assert!(store.get("../etc/passwd").is_err());
        assert!(store.set("a/b", "x").is_err());
        assert!(store.get("").is_err());
    }
}
