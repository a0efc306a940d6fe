use crate::Result;
use crate::storage::KeyValueStore;
use shopcat_types::{FavoriteSet, ProductId};
use tracing::debug;

pub const FAVORITES_KEY: &str = "favorites";

/// Persisted set of favorite product ids.
///
/// Every mutation is written through before it returns, so the stored entry
/// and the in-memory set always agree.
#[derive(Debug, Clone)]
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    ids: FavoriteSet,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Read the persisted set. Missing or unreadable state yields an empty set.
    pub fn load(store: S) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => decode(&raw).unwrap_or_else(|| {
                debug!(raw = %raw, "favorites entry is corrupt, starting empty");
                FavoriteSet::new()
            }),
            Ok(None) => FavoriteSet::new(),
            Err(err) => {
                debug!(error = %err, "favorites entry unreadable, starting empty");
                FavoriteSet::new()
            }
        };

        Self { store, ids }
    }

    /// Flip membership of `id` and persist.
    ///
    /// Returns the new membership (`true` = now a favorite). If the write
    /// fails the flip is undone and the error returned.
    pub fn toggle(&mut self, id: ProductId) -> Result<bool> {
        let now_favorite = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };

        if let Err(err) = self.persist() {
            if now_favorite {
                self.ids.remove(&id);
            } else {
                self.ids.insert(id);
            }
            return Err(err);
        }

        debug!(%id, favorite = now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &FavoriteSet {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&self) -> Result<()> {
        let ids: Vec<ProductId> = self.ids.iter().copied().collect();
        let raw = serde_json::to_string(&ids)
            .map_err(|e| crate::Error::Storage(format!("cannot encode favorites: {}", e)))?;
        self.store.set(FAVORITES_KEY, &raw)
    }
}

fn decode(raw: &str) -> Option<FavoriteSet> {
    serde_json::from_str::<Vec<ProductId>>(raw)
        .ok()
        .map(|ids| ids.into_iter().collect())
}
