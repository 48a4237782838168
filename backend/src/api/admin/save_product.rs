//! Admin upsert of a product row.

use common::product::Product;
use serde::Serialize;
use tracing::info;

use crate::db_utils::supabase_utils::supabase_upsert;

/// Flat write shape: relations are stored as foreign keys, the spec block
/// as a JSON column.
#[derive(Debug, Serialize)]
struct ProductWriteRow {
    id: u64,
    name: String,
    subtitle: Option<String>,
    part_number: Option<String>,
    description: Option<String>,
    manufacturer_id: Option<u64>,
    estimated_price: Option<f64>,
    datasheet_url: Option<String>,
    image_url: Option<String>,
    specifications: serde_json::Value,
}

pub async fn save_product(product: Product) -> anyhow::Result<()> {
    info!("Saving product {} ({})", product.id, product.name);
    let row = ProductWriteRow {
        id: product.id,
        name: product.name,
        subtitle: product.subtitle,
        part_number: product.part_number,
        description: product.description,
        manufacturer_id: product.manufacturer.map(|m| m.id),
        estimated_price: product.estimated_price,
        datasheet_url: product.datasheet_url,
        image_url: product.image_url,
        specifications: serde_json::to_value(&product.specifications)?,
    };
    supabase_upsert("products", &row).await
}
