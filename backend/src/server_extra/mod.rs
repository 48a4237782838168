pub mod download_datasheet;
