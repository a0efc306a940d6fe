use crate::Result;
use shopcat_types::Product;
use std::future::Future;

/// Something that can produce the full product list in one call.
///
/// Implementations never return a partial list on failure: either the whole
/// decoded list or an error.
pub trait ProductSource: Send + Sync {
    /// Human readable origin (URL or file path) for status and log lines
    fn describe(&self) -> String;

    /// Fetch and decode the complete list
    fn fetch(&self) -> impl Future<Output = Result<Vec<Product>>> + Send;
}
