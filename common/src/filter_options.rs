//! Facet option lists and numeric domain bounds for the catalog view.

use serde::{Deserialize, Serialize};

use crate::product::{FeatureRef, ManufacturerRef, Product};


/// Everything the filter panel needs to render its controls: the distinct
/// values present in the catalog per facet, plus the domain bounds of each
/// numeric dimension. Computed once from the full catalog, alongside the
/// product list itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterOptions {
    pub manufacturers: Vec<ManufacturerRef>,
    pub features: Vec<FeatureRef>,
    pub topologies: Vec<String>,
    pub dimming_methods: Vec<String>,
    pub package_types: Vec<String>,
    pub mounting_types: Vec<String>,
    pub channels: Vec<String>,
    pub communication_types: Vec<String>,
    pub input_voltage: DomainBounds,
    pub output_voltage: DomainBounds,
    pub output_current: DomainBounds,
    pub switching_frequency: DomainBounds,
}

/// Inclusive `[min, max]` domain of one numeric filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for DomainBounds {
    fn default() -> Self {
        DomainBounds { min: 0.0, max: 100.0 }
    }
}

impl DomainBounds {
    pub fn new(min: f64, max: f64) -> Self {
        DomainBounds { min, max }
    }

    /// Accumulator seed for deriving the bounds from a catalog: covers
    /// nothing, so the first covered spec sets both ends.
    pub fn empty() -> Self {
        DomainBounds { min: f64::INFINITY, max: f64::NEG_INFINITY }
    }

    /// True while no spec has been covered yet.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Widens the bounds to cover another product's spec range.
    pub fn cover(&mut self, min: Option<f64>, max: Option<f64>) {
        if let Some(min) = min {
            if min < self.min {
                self.min = min;
            }
        }
        if let Some(max) = max {
            if max > self.max {
                self.max = max;
            }
        }
    }

    /// The accumulated bounds, or the default domain when no product in the
    /// catalog specified the dimension.
    pub fn or_default(self) -> Self {
        if self.is_empty() { Self::default() } else { self }
    }
}

/// Wire shape of the catalog fetch: the full product list together with the
/// filter options derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub filter_options: FilterOptions,
}
