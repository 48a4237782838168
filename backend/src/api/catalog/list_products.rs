//! Loads the full product list with embedded manufacturer and feature rows.

use common::filter_options::Catalog;
use common::product::{FeatureRef, ManufacturerRef, Product, Specifications};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::catalog::build_filter_options;
use crate::db_utils::supabase_utils::supabase_select;

/// PostgREST embedding: one query pulls products, their manufacturer and
/// the feature join rows in a single response.
const PRODUCT_SELECT: &str = "select=id,name,subtitle,part_number,description,estimated_price,datasheet_url,image_url,specifications,manufacturer:manufacturers(id,name),product_features(feature:features(id,name))&order=id.asc";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub estimated_price: Option<f64>,
    #[serde(default)]
    pub datasheet_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub specifications: serde_json::Value,
    #[serde(default)]
    pub manufacturer: Option<ManufacturerRef>,
    #[serde(default)]
    pub product_features: Vec<FeatureJoinRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureJoinRow {
    pub feature: Option<FeatureRef>,
}

impl ProductRow {
    /// Malformed specification JSON downgrades to an empty spec block
    /// rather than failing the whole listing.
    pub fn into_product(self) -> Product {
        let specifications = match serde_json::from_value::<Specifications>(self.specifications.clone()) {
            Ok(specifications) => specifications,
            Err(e) => {
                warn!("product {}: unreadable specifications, skipping them: {}", self.id, e);
                Specifications::default()
            }
        };
        let mut features: Vec<FeatureRef> = self
            .product_features
            .into_iter()
            .filter_map(|row| row.feature)
            .collect();
        features.sort();
        features.dedup();

        Product {
            id: self.id,
            name: self.name,
            subtitle: self.subtitle,
            part_number: self.part_number,
            description: self.description,
            manufacturer: self.manufacturer,
            estimated_price: self.estimated_price,
            datasheet_url: self.datasheet_url,
            image_url: self.image_url,
            specifications: Specifications { features, ..specifications },
        }
    }
}

pub async fn list_products() -> anyhow::Result<Vec<Product>> {
    let rows = supabase_select::<ProductRow>("products", PRODUCT_SELECT).await?;
    Ok(rows.into_iter().map(ProductRow::into_product).collect())
}

/// The single payload the catalog page needs: every product plus the
/// filter domains derived from them.
pub async fn fetch_catalog() -> anyhow::Result<Catalog> {
    let products = list_products().await?;
    let filter_options = build_filter_options(&products);
    Ok(Catalog { products, filter_options })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_with_valid_specifications_parses_them() {
        let row: ProductRow = serde_json::from_value(json!({
            "id": 7,
            "name": "MBI5030",
            "specifications": {
                "topology": ["Constant Current Sink"],
                "input_voltage": { "min": 3.3, "max": 5.5, "unit": "V" }
            },
            "manufacturer": { "id": 1, "name": "Macroblock" },
            "product_features": [
                { "feature": { "id": 4, "name": "PWM Dimming" } },
                { "feature": null }
            ]
        }))
        .unwrap();

        let product = row.into_product();
        assert_eq!(product.specifications.topology, vec!["Constant Current Sink"]);
        assert_eq!(product.specifications.input_voltage.as_ref().unwrap().max, Some(5.5));
        assert_eq!(product.specifications.features.len(), 1);
        assert_eq!(product.manufacturer.as_ref().unwrap().name, "Macroblock");
    }

    #[test]
    fn row_with_malformed_specifications_falls_back_to_empty() {
        let row: ProductRow = serde_json::from_value(json!({
            "id": 8,
            "name": "Broken",
            "specifications": "not an object"
        }))
        .unwrap();

        let product = row.into_product();
        assert_eq!(product.specifications, Specifications::default());
    }
}
