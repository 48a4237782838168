//! Derives the filter panel's option lists from the loaded products.

use std::collections::BTreeSet;

use common::filter_options::{DomainBounds, FilterOptions};
use common::product::Product;

/// One pass over the catalog collecting the distinct facet values and
/// widening the numeric domains. Options reflect what is actually present,
/// so the panel never offers a value with zero possible matches and the
/// range controls never show bounds no product reaches.
pub fn build_filter_options(products: &[Product]) -> FilterOptions {
    let mut options = FilterOptions::default();
    options.input_voltage = DomainBounds::empty();
    options.output_voltage = DomainBounds::empty();
    options.output_current = DomainBounds::empty();
    options.switching_frequency = DomainBounds::empty();

    let mut manufacturers = BTreeSet::new();
    let mut features = BTreeSet::new();
    let mut topologies = BTreeSet::new();
    let mut dimming_methods = BTreeSet::new();
    let mut package_types = BTreeSet::new();
    let mut mounting_types = BTreeSet::new();
    let mut channels = BTreeSet::new();
    let mut communication_types = BTreeSet::new();

    for product in products {
        let specs = &product.specifications;
        if let Some(manufacturer) = &product.manufacturer {
            manufacturers.insert(manufacturer.clone());
        }
        features.extend(specs.features.iter().cloned());
        topologies.extend(specs.topology.iter().cloned());
        dimming_methods.extend(specs.dimming_method.iter().cloned());
        package_types.extend(specs.package_type.iter().cloned());
        mounting_types.extend(specs.mounting_type.iter().cloned());
        channels.extend(specs.channels.iter().cloned());
        communication_types.extend(specs.communication_interface.iter().cloned());

        if let Some(range) = &specs.input_voltage {
            options.input_voltage.cover(range.min, range.max);
        }
        if let Some(range) = &specs.output_voltage {
            options.output_voltage.cover(range.min, range.max);
        }
        if let Some(range) = &specs.output_current {
            options.output_current.cover(range.min, range.max);
        }
        if let Some(range) = &specs.switching_frequency {
            options.switching_frequency.cover(range.min, range.max);
        }
    }

    let mut manufacturers: Vec<_> = manufacturers.into_iter().collect();
    manufacturers.sort_by(|a, b| a.name.cmp(&b.name));
    options.manufacturers = manufacturers;
    let mut features: Vec<_> = features.into_iter().collect();
    features.sort_by(|a, b| a.name.cmp(&b.name));
    options.features = features;
    options.topologies = topologies.into_iter().collect();
    options.dimming_methods = dimming_methods.into_iter().collect();
    options.package_types = package_types.into_iter().collect();
    options.mounting_types = mounting_types.into_iter().collect();
    options.channels = channels.into_iter().collect();
    options.communication_types = communication_types.into_iter().collect();

    options.input_voltage = options.input_voltage.or_default();
    options.output_voltage = options.output_voltage.or_default();
    options.output_current = options.output_current.or_default();
    options.switching_frequency = options.switching_frequency.or_default();

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::product::{ManufacturerRef, SpecRange, Specifications};

    fn product_with_specs(id: u64, mfr_name: &str, specs: Specifications) -> Product {
        Product {
            id,
            name: format!("P{}", id),
            manufacturer: Some(ManufacturerRef { id, name: mfr_name.to_string() }),
            specifications: specs,
            ..Default::default()
        }
    }

    #[test]
    fn options_collect_distinct_sorted_values() {
        let products = vec![
            product_with_specs(1, "XLSEMI", Specifications {
                topology: vec!["Buck".to_string(), "Boost".to_string()],
                ..Default::default()
            }),
            product_with_specs(2, "Macroblock", Specifications {
                topology: vec!["Buck".to_string()],
                package_type: Some("SOP8".to_string()),
                ..Default::default()
            }),
        ];

        let options = build_filter_options(&products);
        let names: Vec<&str> = options.manufacturers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Macroblock", "XLSEMI"]);
        assert_eq!(options.topologies, vec!["Boost", "Buck"]);
        assert_eq!(options.package_types, vec!["SOP8"]);
    }

    #[test]
    fn numeric_domains_are_the_exact_catalog_extremes() {
        let products = vec![
            product_with_specs(1, "A", Specifications {
                input_voltage: Some(SpecRange { min: Some(3.0), max: Some(40.0), ..Default::default() }),
                ..Default::default()
            }),
            product_with_specs(2, "B", Specifications {
                input_voltage: Some(SpecRange { min: Some(5.0), max: Some(150.0), ..Default::default() }),
                ..Default::default()
            }),
        ];

        let options = build_filter_options(&products);
        assert_eq!(options.input_voltage.min, 3.0);
        assert_eq!(options.input_voltage.max, 150.0);
    }

    #[test]
    fn dimensions_no_product_specifies_fall_back_to_the_default_domain() {
        let products = vec![product_with_specs(1, "A", Specifications::default())];

        let options = build_filter_options(&products);
        assert_eq!(options.output_current, DomainBounds::default());

        let options = build_filter_options(&[]);
        assert_eq!(options.switching_frequency, DomainBounds::default());
    }
}
