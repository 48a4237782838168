//! Admin removal of a product row.

use tracing::info;

use crate::db_utils::supabase_utils::supabase_delete;

pub async fn delete_product(product_id: u64) -> anyhow::Result<()> {
    info!("Deleting product {}", product_id);
    supabase_delete("products", product_id).await
}
