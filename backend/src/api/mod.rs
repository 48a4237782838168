pub mod admin;
pub mod catalog;
