mod delete_product;
mod save_product;

pub use delete_product::delete_product;
pub use save_product::save_product;
