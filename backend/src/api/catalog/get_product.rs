//! Single-product lookup for the detail page.

use common::product::Product;

use crate::api::catalog::list_products::ProductRow;
use crate::db_utils::supabase_utils::supabase_select;

pub async fn get_product(product_id: u64) -> anyhow::Result<Product> {
    let query = format!(
        "select=id,name,subtitle,part_number,description,estimated_price,datasheet_url,image_url,specifications,manufacturer:manufacturers(id,name),product_features(feature:features(id,name))&id=eq.{}",
        product_id
    );
    let rows = supabase_select::<ProductRow>("products", &query).await?;
    let row = rows
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("product {} not found", product_id))?;
    Ok(row.into_product())
}
