//! The facet filter engine: a pure function from (catalog, filter state) to
//! the matching sub-sequence of the catalog.
//!
//! The engine is total: missing or malformed spec data on a product is
//! treated as "does not satisfy an active constraint that depends on that
//! field" and the product is silently excluded. It never errors.

use crate::catalog_const::{AEC_Q100_CERTIFICATION, AUTOMOTIVE_APPLICATION, HIGH_VOLTAGE_THRESHOLD};
use crate::filter_state::{
    Band, BandEdges, CURRENT_BAND_EDGES, Facet, FacetValue, FilterState, FREQUENCY_BAND_EDGES,
    RangeDimension, RangeFilter, VOLTAGE_BAND_EDGES,
};
use crate::product::{Product, SpecRange};


/// Returns every product satisfying the conjunction of all active filters,
/// in the same relative order as the input. Inactive filters are vacuously
/// satisfied; re-run synchronously on every filter-state change.
pub fn filter_catalog(products: &[Product], state: &FilterState) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product_matches(product, state))
        .cloned()
        .collect()
}

/// Per-product predicate, short-circuiting on the first failing check.
pub fn product_matches(product: &Product, state: &FilterState) -> bool {
    matches_query(product, &state.query)
        && matches_quick_flags(product, state)
        && matches_price_band(product, state)
        && matches_facets(product, state)
        && matches_bands(product, state)
        && matches_ranges(product, &state.ranges)
}

/// Case-insensitive substring match over name, part number, description and
/// manufacturer name. An empty query matches everything.
fn matches_query(product: &Product, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let contains = |field: Option<&str>| {
        field.map(|f| f.to_lowercase().contains(&query)).unwrap_or(false)
    };
    contains(Some(product.name.as_str()))
        || contains(product.part_number.as_deref())
        || contains(product.description.as_deref())
        || contains(product.manufacturer.as_ref().map(|m| m.name.as_str()))
}

fn matches_quick_flags(product: &Product, state: &FilterState) -> bool {
    if state.high_voltage {
        let max_input = product
            .specifications
            .input_voltage
            .as_ref()
            .and_then(|v| v.max);
        match max_input {
            Some(max) if max > HIGH_VOLTAGE_THRESHOLD => {}
            _ => return false,
        }
    }
    if state.aec_q100 {
        let certified = product
            .specifications
            .certifications
            .iter()
            .any(|c| c == AEC_Q100_CERTIFICATION);
        if !certified {
            return false;
        }
    }
    if state.automotive {
        let automotive = product
            .specifications
            .applications
            .iter()
            .any(|a| a == AUTOMOTIVE_APPLICATION);
        if !automotive {
            return false;
        }
    }
    // unknown counts as "does not have it": only an explicit true matches
    if state.internal_switch && product.specifications.internal_switch != Some(true) {
        return false;
    }
    if state.thermal_pad && product.specifications.thermal_pad != Some(true) {
        return false;
    }
    true
}

/// An active price band requires a known price inside its half-open bounds.
fn matches_price_band(product: &Product, state: &FilterState) -> bool {
    let Some(band) = state.price_band else {
        return true;
    };
    match product.estimated_price {
        Some(price) => band.matches(price),
        None => false,
    }
}

fn matches_facets(product: &Product, state: &FilterState) -> bool {
    state.facets.iter().all(|(facet, selected)| {
        if selected.is_empty() {
            return true;
        }
        facet_values(product, *facet)
            .iter()
            .any(|value| selected.contains(value))
    })
}

/// The product's own values for one facet. Products missing the underlying
/// field contribute no values and therefore never match a selection on that
/// facet.
fn facet_values(product: &Product, facet: Facet) -> Vec<FacetValue> {
    let specs = &product.specifications;
    match facet {
        Facet::Manufacturer => product
            .manufacturer
            .iter()
            .map(|m| FacetValue::Id(m.id))
            .collect(),
        Facet::Feature => specs.features.iter().map(|f| FacetValue::Id(f.id)).collect(),
        Facet::Topology => specs
            .topology
            .iter()
            .map(|t| FacetValue::Text(t.clone()))
            .collect(),
        Facet::DimmingMethod => specs
            .dimming_method
            .iter()
            .map(|d| FacetValue::Text(d.clone()))
            .collect(),
        Facet::PackageType => specs
            .package_type
            .iter()
            .map(|p| FacetValue::Text(p.clone()))
            .collect(),
        Facet::MountingType => specs
            .mounting_type
            .iter()
            .map(|m| FacetValue::Text(m.clone()))
            .collect(),
        Facet::ChannelCount => specs
            .channels
            .iter()
            .map(|c| FacetValue::Text(c.clone()))
            .collect(),
        Facet::Communication => specs
            .communication_interface
            .iter()
            .map(|c| FacetValue::Text(c.clone()))
            .collect(),
    }
}

fn matches_bands(product: &Product, state: &FilterState) -> bool {
    let specs = &product.specifications;
    band_matches(state.voltage_band, specs.input_voltage.as_ref(), VOLTAGE_BAND_EDGES)
        && band_matches(state.current_band, specs.output_current.as_ref(), CURRENT_BAND_EDGES)
        && band_matches(
            state.frequency_band,
            specs.switching_frequency.as_ref(),
            FREQUENCY_BAND_EDGES,
        )
}

/// Classifies on the spec's max. Absent spec fields exclude the product
/// while the band is active.
fn band_matches(band: Option<Band>, spec: Option<&SpecRange>, edges: BandEdges) -> bool {
    let Some(band) = band else {
        return true;
    };
    match spec.and_then(|s| s.max) {
        Some(max) => band.matches(edges, max),
        None => false,
    }
}

fn matches_ranges(product: &Product, ranges: &[RangeFilter]) -> bool {
    ranges.iter().all(|range| {
        if !range.is_active() {
            return true;
        }
        let spec = range_spec(product, range.dimension);
        range_overlaps(spec, range)
    })
}

fn range_spec(product: &Product, dimension: RangeDimension) -> Option<&SpecRange> {
    let specs = &product.specifications;
    match dimension {
        RangeDimension::InputVoltage => specs.input_voltage.as_ref(),
        RangeDimension::OutputVoltage => specs.output_voltage.as_ref(),
        RangeDimension::OutputCurrent => specs.output_current.as_ref(),
        RangeDimension::SwitchingFrequency => specs.switching_frequency.as_ref(),
    }
}

/// Inclusive interval-overlap test: the product's `[min, max]` spec must
/// intersect the selected `[low, high]`. A product without the spec is
/// excluded while the filter is active.
fn range_overlaps(spec: Option<&SpecRange>, range: &RangeFilter) -> bool {
    let Some(spec) = spec else {
        return false;
    };
    let (Some(spec_min), Some(spec_max)) = (spec.min, spec.max) else {
        return false;
    };
    spec_max >= range.low && spec_min <= range.high
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_options::FilterOptions;
    use crate::filter_state::PriceBand;
    use crate::product::{ManufacturerRef, Specifications};

    fn spec_range(min: f64, max: f64) -> Option<SpecRange> {
        Some(SpecRange { min: Some(min), max: Some(max), typ: None, unit: None })
    }

    fn product(id: u64, name: &str, mfr: (u64, &str), topology: &str, vin_max: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            manufacturer: Some(ManufacturerRef { id: mfr.0, name: mfr.1.to_string() }),
            specifications: Specifications {
                topology: vec![topology.to_string()],
                input_voltage: spec_range(3.0, vin_max),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "LM501", (1, "Macroblock"), "Buck", 12.0),
            product(2, "XQ900", (2, "XLSEMI"), "Boost", 40.0),
            product(3, "LM730", (1, "Macroblock"), "Buck-Boost", 60.0),
        ]
    }

    fn default_state() -> FilterState {
        FilterState::for_options(&FilterOptions::default())
    }

    #[test]
    fn default_state_returns_the_full_catalog_in_order() {
        let catalog = sample_catalog();
        let result = filter_catalog(&catalog, &default_state());
        assert_eq!(result, catalog);
    }

    #[test]
    fn clear_after_filtering_restores_the_full_catalog() {
        let catalog = sample_catalog();
        let mut state = default_state();
        state.query = "xlsemi".to_string();
        state.voltage_band = Some(Band::VeryHigh);
        assert_eq!(filter_catalog(&catalog, &state).len(), 1);

        state.clear();
        assert_eq!(filter_catalog(&catalog, &state), catalog);
    }

    #[test]
    fn text_search_is_case_insensitive_and_covers_manufacturer_name() {
        let catalog = sample_catalog();
        let mut state = default_state();
        state.query = "macroblock".to_string();
        let result = filter_catalog(&catalog, &state);
        let ids: Vec<u64> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn text_search_covers_part_number_and_description() {
        let mut p = product(9, "Driver", (5, "Acme"), "Buck", 10.0);
        p.part_number = Some("MBI6651GD".to_string());
        p.description = Some("Step-down LED driver".to_string());
        let catalog = vec![p];

        let mut state = default_state();
        state.query = "mbi6651".to_string();
        assert_eq!(filter_catalog(&catalog, &state).len(), 1);

        state.query = "step-DOWN".to_string();
        assert_eq!(filter_catalog(&catalog, &state).len(), 1);

        state.query = "no such thing".to_string();
        assert!(filter_catalog(&catalog, &state).is_empty());
    }

    #[test]
    fn facet_is_or_within_and_and_across() {
        let catalog = sample_catalog();
        let mut state = default_state();

        // Both manufacturers selected: OR within the facet keeps all three.
        state.toggle_facet_value(Facet::Manufacturer, FacetValue::Id(1));
        state.toggle_facet_value(Facet::Manufacturer, FacetValue::Id(2));
        assert_eq!(filter_catalog(&catalog, &state).len(), 3);

        // Adding a topology only product 1 has narrows across facets.
        state.toggle_facet_value(Facet::Topology, FacetValue::Text("Buck".to_string()));
        let ids: Vec<u64> = filter_catalog(&catalog, &state).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn facet_selection_excludes_products_missing_the_field() {
        let mut bare = Product { id: 4, name: "Bare".to_string(), ..Default::default() };
        bare.specifications = Specifications::default();
        let catalog = vec![bare];

        let mut state = default_state();
        state.toggle_facet_value(Facet::PackageType, FacetValue::Text("SOP8".to_string()));
        assert!(filter_catalog(&catalog, &state).is_empty());
    }

    #[test]
    fn adding_a_filter_never_grows_the_result_set() {
        let catalog = sample_catalog();
        let mut state = default_state();
        state.toggle_facet_value(Facet::Manufacturer, FacetValue::Id(1));
        let before = filter_catalog(&catalog, &state).len();

        state.aec_q100 = true;
        let after = filter_catalog(&catalog, &state).len();
        assert!(after <= before);

        state.aec_q100 = false;
        state.range_mut(RangeDimension::InputVoltage).unwrap().narrow(50.0, 100.0);
        let narrowed = filter_catalog(&catalog, &state).len();
        assert!(narrowed <= before);
    }

    #[test]
    fn range_filter_uses_inclusive_interval_overlap() {
        // input_voltage = [3, 20]
        let catalog = vec![product(1, "P", (1, "M"), "Buck", 20.0)];
        let mut state = default_state();

        state.range_mut(RangeDimension::InputVoltage).unwrap().narrow(10.0, 15.0);
        assert_eq!(filter_catalog(&catalog, &state).len(), 1, "overlapping range matches");

        state.range_mut(RangeDimension::InputVoltage).unwrap().narrow(21.0, 30.0);
        assert!(filter_catalog(&catalog, &state).is_empty(), "disjoint range excludes");

        state.range_mut(RangeDimension::InputVoltage).unwrap().narrow(20.0, 25.0);
        assert_eq!(filter_catalog(&catalog, &state).len(), 1, "touching bound is inclusive");
    }

    #[test]
    fn active_range_excludes_products_without_the_spec() {
        let mut p = product(1, "P", (1, "M"), "Buck", 20.0);
        p.specifications.output_current = None;
        let catalog = vec![p];

        let mut state = default_state();
        state.range_mut(RangeDimension::OutputCurrent).unwrap().narrow(10.0, 50.0);
        assert!(filter_catalog(&catalog, &state).is_empty());
    }

    #[test]
    fn quick_flags_are_independent_thresholds() {
        let mut p = product(1, "P", (1, "M"), "Buck", 48.0);
        p.specifications.certifications = vec!["AEC-Q100".to_string()];
        p.specifications.applications = vec!["Automotive".to_string()];
        let catalog = vec![p, product(2, "Q", (1, "M"), "Buck", 12.0)];

        let mut state = default_state();
        state.high_voltage = true;
        state.aec_q100 = true;
        state.automotive = true;
        let ids: Vec<u64> = filter_catalog(&catalog, &state).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn internal_switch_flag_requires_an_explicit_true() {
        let mut with_switch = product(1, "P", (1, "M"), "Buck", 12.0);
        with_switch.specifications.internal_switch = Some(true);
        let mut without_switch = product(2, "Q", (1, "M"), "Buck", 12.0);
        without_switch.specifications.internal_switch = Some(false);
        // product 3 leaves the field unset
        let catalog = vec![with_switch, without_switch, product(3, "R", (1, "M"), "Buck", 12.0)];

        let mut state = default_state();
        state.internal_switch = true;
        let ids: Vec<u64> = filter_catalog(&catalog, &state).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn thermal_pad_flag_requires_an_explicit_true() {
        let mut with_pad = product(1, "P", (1, "M"), "Buck", 12.0);
        with_pad.specifications.thermal_pad = Some(true);
        let catalog = vec![with_pad, product(2, "Q", (1, "M"), "Buck", 12.0)];

        let mut state = default_state();
        state.thermal_pad = true;
        let ids: Vec<u64> = filter_catalog(&catalog, &state).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);

        state.thermal_pad = false;
        assert_eq!(filter_catalog(&catalog, &state).len(), 2);
    }

    #[test]
    fn price_band_excludes_unpriced_products() {
        let mut priced = product(1, "P", (1, "M"), "Buck", 12.0);
        priced.estimated_price = Some(1.4);
        let unpriced = product(2, "Q", (1, "M"), "Buck", 12.0);
        let catalog = vec![priced, unpriced];

        let mut state = default_state();
        state.price_band = Some(PriceBand::OneToTwo);
        let ids: Vec<u64> = filter_catalog(&catalog, &state).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn voltage_band_excludes_products_without_input_voltage() {
        let mut p = product(1, "P", (1, "M"), "Buck", 12.0);
        p.specifications.input_voltage = None;
        let catalog = vec![p];

        let mut state = default_state();
        state.voltage_band = Some(Band::Low);
        assert!(filter_catalog(&catalog, &state).is_empty());
    }

    #[test]
    fn output_preserves_input_order() {
        let catalog = sample_catalog();
        let mut state = default_state();
        state.toggle_facet_value(Facet::Manufacturer, FacetValue::Id(1));
        let ids: Vec<u64> = filter_catalog(&catalog, &state).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn manufacturer_plus_very_high_voltage_scenario() {
        // P1 Macroblock Buck 12V, P2 XLSEMI Boost 40V, P3 Macroblock Buck-Boost 60V.
        let catalog = sample_catalog();
        let mut state = default_state();
        state.toggle_facet_value(Facet::Manufacturer, FacetValue::Id(1));
        state.voltage_band = Some(Band::VeryHigh);

        let ids: Vec<u64> = filter_catalog(&catalog, &state).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3], "only P3 is both Macroblock and >= 24 V");
    }
}
