pub mod catalog_components;
pub mod error_boundary;
pub mod navbar;
pub mod product_view_components;
pub mod suspend_boundary;
