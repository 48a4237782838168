mod filter_options;
mod get_product;
mod list_products;

pub use filter_options::build_filter_options;
pub use get_product::get_product;
pub use list_products::{fetch_catalog, list_products};
