use crate::decode::decode_products;
use crate::traits::ProductSource;
use crate::{Error, Result};
use shopcat_types::Product;
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fallback source: a local JSON file with the same array shape as the API
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSource for SnapshotSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> impl Future<Output = Result<Vec<Product>>> + Send {
        async move {
            debug!(path = %self.path.display(), "reading product snapshot");

            let body = tokio::fs::read(&self.path)
                .await
                .map_err(|source| Error::Snapshot {
                    path: self.path.clone(),
                    source,
                })?;

            decode_products(&body)
        }
    }
}
