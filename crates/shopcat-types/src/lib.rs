pub mod criteria;
pub mod error;
pub mod product;
pub mod theme;

pub use criteria::{CategoryFilter, Criteria, SortMode};
pub use error::{Error, Result};
pub use product::{FavoriteSet, Product, ProductId, Rating};
pub use theme::Theme;
