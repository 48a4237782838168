//! Client API calls for catalog endpoints.

use common::{filter_options::Catalog, product::Product};
use dioxus::prelude::*;


#[server]
pub async fn fetch_catalog() -> Result<Catalog, ServerFnError> {
    let x = backend::api::catalog::fetch_catalog().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn fetch_product(product_id: u64) -> Result<Product, ServerFnError> {
    let x = backend::api::catalog::get_product(product_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn save_product(product: Product) -> Result<(), ServerFnError> {
    let x = backend::api::admin::save_product(product).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn delete_product(product_id: u64) -> Result<(), ServerFnError> {
    let x = backend::api::admin::delete_product(product_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
