pub mod about_page;
pub mod admin_product_page;
pub mod catalog_page;
pub mod home_page;
pub mod product_detail_page;
