//! Raw axum route that proxies a product's datasheet PDF as an attachment,
//! so the browser downloads it under the part name instead of navigating to
//! the manufacturer's hosting URL.

use anyhow::Context;
use axum::{
    body::Body,
    extract::Path,
    response::{IntoResponse, Response},
};
use reqwest::StatusCode;
use tracing::info;

use crate::api::catalog::get_product;

async fn _download_datasheet(Path(product_id): Path<u64>) -> anyhow::Result<impl IntoResponse> {
    info!("Downloading datasheet for product: {}", product_id);

    let product = get_product(product_id).await?;
    let datasheet_url = product
        .datasheet_url
        .clone()
        .context("product has no datasheet")?;
    let filename = format!(
        "{}.pdf",
        product.part_number.as_deref().unwrap_or(&product.name)
    );
    let headers: [(String, String); 2] = [
        ("Content-Type".to_string(), "application/pdf".to_string()),
        (
            "Content-Disposition".to_string(),
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    let response = reqwest::get(&datasheet_url).await?;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("datasheet fetch failed: {}: {}", status, datasheet_url);
    }
    let body = Body::from_stream(response.bytes_stream());
    Ok((headers, body).into_response())
}

pub async fn download_datasheet(Path(product_id): Path<u64>) -> Response {
    match _download_datasheet(Path(product_id)).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("download_datasheet: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}
