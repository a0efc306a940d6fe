//! Product sources: where the catalog comes from.
//!
//! A source knows how to produce a full product list in one call. The
//! primary source is the HTTP catalog API; the fallback is a static JSON
//! snapshot on disk. Both share the same decoding rules (see [`decode`]).

pub mod decode;
pub mod error;
pub mod http;
pub mod snapshot;
pub mod traits;

pub use decode::decode_products;
pub use error::{Error, Result};
pub use http::{DEFAULT_API_URL, HttpSource};
pub use snapshot::SnapshotSource;
pub use traits::ProductSource;
