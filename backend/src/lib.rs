//! Backend library: database access and server-side API for the catalog.

pub mod api;
pub mod db_utils;
pub mod server_extra;
