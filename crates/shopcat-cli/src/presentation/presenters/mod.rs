pub mod catalog;
pub mod init;
pub mod preferences;
pub mod product;

pub use catalog::{
    build_product_list, present_categories, present_export_result, present_product_list,
};
pub use init::present_init_result;
pub use preferences::{present_favorite_list, present_favorite_toggle, present_theme};
pub use product::{build_product_detail, present_product_detail};
