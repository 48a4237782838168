//! Shared product catalog models.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub subtitle: Option<String>,
    pub part_number: Option<String>,
    pub description: Option<String>,
    pub manufacturer: Option<ManufacturerRef>,
    /// Optional list price estimate. Null when the backend has no pricing
    /// data for this part; never synthesized client-side.
    pub estimated_price: Option<f64>,
    pub datasheet_url: Option<String>,
    pub image_url: Option<String>,
    pub specifications: Specifications,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Hash, Eq, PartialOrd, Ord)]
pub struct ManufacturerRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Hash, Eq, PartialOrd, Ord)]
pub struct FeatureRef {
    pub id: u64,
    pub name: String,
}

/// Electrical/physical specification bag for one product. Every field is
/// optional or empty-by-default: the engine treats missing data as "does
/// not satisfy an active constraint", not as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Specifications {
    pub topology: Vec<String>,
    pub dimming_method: Vec<String>,
    pub package_type: Option<String>,
    pub mounting_type: Option<String>,
    pub channels: Option<String>,
    pub communication_interface: Vec<String>,
    pub internal_switch: Option<bool>,
    pub thermal_pad: Option<bool>,
    pub input_voltage: Option<SpecRange>,
    pub output_voltage: Option<SpecRange>,
    pub output_current: Option<SpecRange>,
    pub switching_frequency: Option<SpecRange>,
    pub certifications: Vec<String>,
    pub applications: Vec<String>,
    pub features: Vec<FeatureRef>,
}

/// A min/max/typical numeric spec with its unit label, e.g. 6-60 V input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpecRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub typ: Option<f64>,
    pub unit: Option<String>,
}

impl SpecRange {
    pub fn display_string(&self) -> String {
        let unit = self.unit.as_deref().unwrap_or("");
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("{min} - {max} {unit}"),
            (Some(min), None) => format!("≥ {min} {unit}"),
            (None, Some(max)) => format!("≤ {max} {unit}"),
            (None, None) => match self.typ {
                Some(typ) => format!("{typ} {unit} (typ)"),
                None => "-".to_string(),
            },
        }
    }
}
