// Engine module - pure catalog logic
// This layer sits between the data model (types) and the runtime/CLI layers

pub mod catalog;
pub mod pipeline;

pub use catalog::Catalog;
pub use pipeline::apply;

use shopcat_types::{Criteria, FavoriteSet, Product};

/// Products of `catalog` that `criteria` lets through, in display order
pub fn visible<'a>(
    catalog: &'a Catalog,
    favorites: &FavoriteSet,
    criteria: &Criteria,
) -> Vec<&'a Product> {
    pipeline::apply(catalog.products(), favorites, criteria)
}
