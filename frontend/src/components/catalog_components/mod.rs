pub mod active_filter_badges;
pub mod catalog_list_controls;
pub mod filter_panel;
pub mod product_card;
pub mod quick_filter_bar;
pub mod range_filter_control;
