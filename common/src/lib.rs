//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod product;
pub mod filter_state;
pub mod filter_engine;
pub mod filter_options;
pub mod catalog_const;
