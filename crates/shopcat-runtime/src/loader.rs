use crate::Result;
use crate::config::Config;
use serde::Serialize;
use shopcat_engine::Catalog;
use shopcat_providers::{HttpSource, ProductSource, SnapshotSource};
use std::fmt;
use std::path::Path;
use tracing::{error, info, warn};

/// Failure of a single source. For the primary source this is what triggers
/// the fallback.
pub type NetworkError = shopcat_providers::Error;

/// Which source served the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadOrigin {
    Primary,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub origin: LoadOrigin,
    /// URL or path the catalog came from
    pub source: String,
}

/// Both the primary and the fallback source failed. Terminal until the user
/// retries.
#[derive(Debug)]
pub struct LoadError {
    pub primary_source: String,
    pub primary: NetworkError,
    pub fallback_source: String,
    pub fallback: NetworkError,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not load products from {} ({}); fallback {} also failed ({})",
            self.primary_source, self.primary, self.fallback_source, self.fallback
        )
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.primary)
    }
}

/// Primary source first, then exactly one attempt at the fallback.
///
/// The loader only returns data; storing it is the caller's job.
#[derive(Debug, Clone)]
pub struct CatalogLoader<P, F> {
    primary: P,
    fallback: F,
}

impl<P: ProductSource, F: ProductSource> CatalogLoader<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    pub async fn load(&self) -> std::result::Result<LoadedCatalog, LoadError> {
        let primary_source = self.primary.describe();
        let primary = match self.primary.fetch().await {
            Ok(products) => {
                info!(source = %primary_source, count = products.len(), "catalog loaded");
                return Ok(LoadedCatalog {
                    catalog: Catalog::new(products),
                    origin: LoadOrigin::Primary,
                    source: primary_source,
                });
            }
            Err(err) => err,
        };

        let fallback_source = self.fallback.describe();
        warn!(
            source = %primary_source,
            error = %primary,
            fallback = %fallback_source,
            "primary source failed, trying fallback"
        );

        match self.fallback.fetch().await {
            Ok(products) => {
                info!(source = %fallback_source, count = products.len(), "catalog loaded from fallback");
                Ok(LoadedCatalog {
                    catalog: Catalog::new(products),
                    origin: LoadOrigin::Fallback,
                    source: fallback_source,
                })
            }
            Err(fallback) => {
                error!(source = %fallback_source, error = %fallback, "fallback source failed");
                Err(LoadError {
                    primary_source,
                    primary,
                    fallback_source,
                    fallback,
                })
            }
        }
    }
}

/// HTTP endpoint with an on-disk snapshot behind it
pub type DefaultLoader = CatalogLoader<HttpSource, SnapshotSource>;

impl DefaultLoader {
    pub fn from_config(config: &Config, data_dir: &Path) -> Result<Self> {
        let primary = HttpSource::new(config.api_url.clone(), config.request_timeout())?;
        let fallback = SnapshotSource::new(config.resolved_fallback_path(data_dir));
        Ok(Self::new(primary, fallback))
    }
}
