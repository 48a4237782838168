//! Filter state owned by the catalog view: facet selections, quick flags,
//! band selections and numeric range filters.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::filter_options::FilterOptions;


/// One facet dimension of the catalog. Selections are kept per facet in a
/// tagged map instead of a flat prefix-keyed boolean map, so the engine can
/// recover the facet a selection belongs to without string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Facet {
    Manufacturer,
    Feature,
    Topology,
    DimmingMethod,
    PackageType,
    MountingType,
    ChannelCount,
    Communication,
}

impl Facet {
    pub const ALL: [Facet; 8] = [
        Facet::Manufacturer,
        Facet::Feature,
        Facet::Topology,
        Facet::DimmingMethod,
        Facet::PackageType,
        Facet::MountingType,
        Facet::ChannelCount,
        Facet::Communication,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Facet::Manufacturer => "Manufacturer",
            Facet::Feature => "Features",
            Facet::Topology => "Topology",
            Facet::DimmingMethod => "Dimming Method",
            Facet::PackageType => "Package Type",
            Facet::MountingType => "Mounting Type",
            Facet::ChannelCount => "Channels",
            Facet::Communication => "Communication Interface",
        }
    }
}

/// A selectable facet value: a row id for manufacturer/feature facets, a
/// plain string for the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq)]
pub enum FacetValue {
    Id(u64),
    Text(String),
}

/// One of the four coarse bands of a numeric dimension. At most one band may
/// be selected per dimension (`Option<Band>` in the state), which makes the
/// mutually-exclusive convention of the UI unrepresentable to violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    Low,
    Mid,
    High,
    VeryHigh,
}

/// Band edges: three ascending cut points splitting a dimension into
/// `<=e0`, `(e0, e1]`, `(e1, e2]` and `>=e2`.
pub type BandEdges = [f64; 3];

pub const VOLTAGE_BAND_EDGES: BandEdges = [5.0, 12.0, 24.0];
pub const CURRENT_BAND_EDGES: BandEdges = [100.0, 500.0, 1500.0];
pub const FREQUENCY_BAND_EDGES: BandEdges = [100.0, 500.0, 1000.0];

impl Band {
    pub const ALL: [Band; 4] = [Band::Low, Band::Mid, Band::High, Band::VeryHigh];

    /// Whether `value` (the spec's max) falls inside this band.
    pub fn matches(&self, edges: BandEdges, value: f64) -> bool {
        match self {
            Band::Low => value <= edges[0],
            Band::Mid => value > edges[0] && value <= edges[1],
            Band::High => value > edges[1] && value <= edges[2],
            Band::VeryHigh => value >= edges[2],
        }
    }

    pub fn display_string(&self, edges: BandEdges, unit: &str) -> String {
        match self {
            Band::Low => format!("≤ {} {unit}", edges[0]),
            Band::Mid => format!("{} - {} {unit}", edges[0], edges[1]),
            Band::High => format!("{} - {} {unit}", edges[1], edges[2]),
            Band::VeryHigh => format!("≥ {} {unit}", edges[2]),
        }
    }
}

/// Nine fixed price bands in USD. Pricing data is optional per product;
/// products without a price never match an active band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBand {
    UnderHalfDollar,
    HalfToOne,
    OneToTwo,
    TwoToThree,
    ThreeToFive,
    FiveToTen,
    TenToTwenty,
    TwentyToFifty,
    OverFifty,
}

impl PriceBand {
    pub const ALL: [PriceBand; 9] = [
        PriceBand::UnderHalfDollar,
        PriceBand::HalfToOne,
        PriceBand::OneToTwo,
        PriceBand::TwoToThree,
        PriceBand::ThreeToFive,
        PriceBand::FiveToTen,
        PriceBand::TenToTwenty,
        PriceBand::TwentyToFifty,
        PriceBand::OverFifty,
    ];

    /// Half-open `[low, high)` range of the band, upper band unbounded.
    pub fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            PriceBand::UnderHalfDollar => (0.0, Some(0.5)),
            PriceBand::HalfToOne => (0.5, Some(1.0)),
            PriceBand::OneToTwo => (1.0, Some(2.0)),
            PriceBand::TwoToThree => (2.0, Some(3.0)),
            PriceBand::ThreeToFive => (3.0, Some(5.0)),
            PriceBand::FiveToTen => (5.0, Some(10.0)),
            PriceBand::TenToTwenty => (10.0, Some(20.0)),
            PriceBand::TwentyToFifty => (20.0, Some(50.0)),
            PriceBand::OverFifty => (50.0, None),
        }
    }

    pub fn matches(&self, price: f64) -> bool {
        let (low, high) = self.bounds();
        match high {
            Some(high) => price >= low && price < high,
            None => price >= low,
        }
    }

    pub fn display_string(&self) -> String {
        let (low, high) = self.bounds();
        match high {
            Some(high) => format!("${low} - ${high}"),
            None => format!("${low}+"),
        }
    }
}

/// The numeric dimension a fine-grained range filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeDimension {
    InputVoltage,
    OutputVoltage,
    OutputCurrent,
    SwitchingFrequency,
}

impl RangeDimension {
    pub fn display_name(&self) -> &'static str {
        match self {
            RangeDimension::InputVoltage => "Input Voltage",
            RangeDimension::OutputVoltage => "Output Voltage",
            RangeDimension::OutputCurrent => "Output Current",
            RangeDimension::SwitchingFrequency => "Switching Frequency",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            RangeDimension::InputVoltage => "V",
            RangeDimension::OutputVoltage => "V",
            RangeDimension::OutputCurrent => "mA",
            RangeDimension::SwitchingFrequency => "kHz",
        }
    }
}

/// A fine-grained `[low, high]` sub-range selection over a fixed domain.
/// Invariant: `min <= low <= high <= max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub dimension: RangeDimension,
    pub min: f64,
    pub max: f64,
    pub low: f64,
    pub high: f64,
}

impl RangeFilter {
    pub fn full_domain(dimension: RangeDimension, min: f64, max: f64) -> Self {
        RangeFilter { dimension, min, max, low: min, high: max }
    }

    /// Active means the selection has been narrowed from the full domain.
    pub fn is_active(&self) -> bool {
        self.low > self.min || self.high < self.max
    }

    /// Sets the selection, clamped to the domain and kept ordered.
    pub fn narrow(&mut self, low: f64, high: f64) {
        let low = low.clamp(self.min, self.max);
        let high = high.clamp(self.min, self.max);
        if low <= high {
            self.low = low;
            self.high = high;
        }
    }

    pub fn reset(&mut self) {
        self.low = self.min;
        self.high = self.max;
    }
}

/// The full filter state of one catalog view session. Created with all-off /
/// full-domain defaults, mutated by user toggles, discarded when the view is
/// left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    pub query: String,
    pub high_voltage: bool,
    pub aec_q100: bool,
    pub automotive: bool,
    pub internal_switch: bool,
    pub thermal_pad: bool,
    pub facets: BTreeMap<Facet, BTreeSet<FacetValue>>,
    pub voltage_band: Option<Band>,
    pub current_band: Option<Band>,
    pub frequency_band: Option<Band>,
    pub price_band: Option<PriceBand>,
    pub ranges: Vec<RangeFilter>,
}

impl FilterState {
    /// Fresh state for a catalog view, range domains taken from the filter
    /// options supplied with the catalog.
    pub fn for_options(options: &FilterOptions) -> Self {
        FilterState {
            ranges: vec![
                RangeFilter::full_domain(
                    RangeDimension::InputVoltage,
                    options.input_voltage.min,
                    options.input_voltage.max,
                ),
                RangeFilter::full_domain(
                    RangeDimension::OutputVoltage,
                    options.output_voltage.min,
                    options.output_voltage.max,
                ),
                RangeFilter::full_domain(
                    RangeDimension::OutputCurrent,
                    options.output_current.min,
                    options.output_current.max,
                ),
                RangeFilter::full_domain(
                    RangeDimension::SwitchingFrequency,
                    options.switching_frequency.min,
                    options.switching_frequency.max,
                ),
            ],
            ..Default::default()
        }
    }

    pub fn is_facet_value_selected(&self, facet: Facet, value: &FacetValue) -> bool {
        self.facets.get(&facet).map(|set| set.contains(value)).unwrap_or(false)
    }

    /// Adds the value to the facet's selection set, or removes it if already
    /// selected. Empty sets are dropped so absent facets stay absent.
    pub fn toggle_facet_value(&mut self, facet: Facet, value: FacetValue) {
        let entry = self.facets.entry(facet).or_insert(BTreeSet::new());
        if !entry.insert(value.clone()) {
            entry.remove(&value);
        }
        if entry.is_empty() {
            self.facets.remove(&facet);
        }
    }

    pub fn selected_facet_values(&self, facet: Facet) -> BTreeSet<FacetValue> {
        self.facets.get(&facet).cloned().unwrap_or_default()
    }

    pub fn range_mut(&mut self, dimension: RangeDimension) -> Option<&mut RangeFilter> {
        self.ranges.iter_mut().find(|r| r.dimension == dimension)
    }

    /// Number of currently active filters: every selected facet value, every
    /// set quick flag, every band selection and every narrowed range counts
    /// as one. Drives the count badge and the clear-filters control.
    pub fn active_filter_count(&self) -> usize {
        let facet_count: usize = self.facets.values().map(|set| set.len()).sum();
        let flag_count = [
            self.high_voltage,
            self.aec_q100,
            self.automotive,
            self.internal_switch,
            self.thermal_pad,
        ]
        .iter()
        .filter(|f| **f)
        .count();
        let band_count = [
            self.voltage_band.is_some(),
            self.current_band.is_some(),
            self.frequency_band.is_some(),
            self.price_band.is_some(),
        ]
        .iter()
        .filter(|b| **b)
        .count();
        let range_count = self.ranges.iter().filter(|r| r.is_active()).count();
        facet_count + flag_count + band_count + range_count
    }

    /// Resets every filter and the text query. Range domains are kept,
    /// selections go back to the full domain. Idempotent.
    pub fn clear(&mut self) {
        self.query.clear();
        self.high_voltage = false;
        self.aec_q100 = false;
        self.automotive = false;
        self.internal_switch = false;
        self.thermal_pad = false;
        self.facets.clear();
        self.voltage_band = None;
        self.current_band = None;
        self.frequency_band = None;
        self.price_band = None;
        for range in self.ranges.iter_mut() {
            range.reset();
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_a_facet_value_twice_removes_the_entry() {
        let mut state = FilterState::default();
        let value = FacetValue::Text("Buck".to_string());
        state.toggle_facet_value(Facet::Topology, value.clone());
        assert!(state.is_facet_value_selected(Facet::Topology, &value));
        state.toggle_facet_value(Facet::Topology, value.clone());
        assert!(!state.is_facet_value_selected(Facet::Topology, &value));
        assert!(state.facets.is_empty());
    }

    #[test]
    fn active_count_sums_flags_facets_bands_and_ranges() {
        let mut state = FilterState::for_options(&FilterOptions::default());
        assert_eq!(state.active_filter_count(), 0);

        state.aec_q100 = true;
        assert_eq!(state.active_filter_count(), 1);

        state.toggle_facet_value(Facet::Manufacturer, FacetValue::Id(3));
        state.toggle_facet_value(Facet::Manufacturer, FacetValue::Id(7));
        assert_eq!(state.active_filter_count(), 3);

        state.voltage_band = Some(Band::VeryHigh);
        assert_eq!(state.active_filter_count(), 4);

        state.range_mut(RangeDimension::InputVoltage).unwrap().narrow(10.0, 48.0);
        assert_eq!(state.active_filter_count(), 5);

        state.internal_switch = true;
        state.thermal_pad = true;
        assert_eq!(state.active_filter_count(), 7);
    }

    #[test]
    fn narrowing_one_range_counts_as_one_filter() {
        let mut state = FilterState::for_options(&FilterOptions::default());
        state.range_mut(RangeDimension::OutputCurrent).unwrap().narrow(20.0, 80.0);
        assert_eq!(state.active_filter_count(), 1);
    }

    #[test]
    fn range_narrow_clamps_to_domain() {
        let mut range = RangeFilter::full_domain(RangeDimension::InputVoltage, 0.0, 60.0);
        range.narrow(-10.0, 90.0);
        assert_eq!((range.low, range.high), (0.0, 60.0));
        assert!(!range.is_active());

        range.narrow(5.0, 30.0);
        assert!(range.is_active());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = FilterState::for_options(&FilterOptions::default());
        state.query = "macroblock".to_string();
        state.high_voltage = true;
        state.price_band = Some(PriceBand::OneToTwo);
        state.toggle_facet_value(Facet::PackageType, FacetValue::Text("SOP8".to_string()));
        state.range_mut(RangeDimension::SwitchingFrequency).unwrap().narrow(200.0, 400.0);

        state.clear();
        let cleared = state.clone();
        assert_eq!(state.active_filter_count(), 0);
        assert!(state.query.is_empty());

        state.clear();
        assert_eq!(state, cleared);
    }

    #[test]
    fn band_edges_are_inclusive_at_the_top_cut() {
        // 24 V sits on the boundary: it still qualifies as very-high.
        assert!(Band::VeryHigh.matches(VOLTAGE_BAND_EDGES, 24.0));
        assert!(Band::High.matches(VOLTAGE_BAND_EDGES, 24.0));
        assert!(!Band::VeryHigh.matches(VOLTAGE_BAND_EDGES, 23.9));
        assert!(Band::Low.matches(VOLTAGE_BAND_EDGES, 5.0));
        assert!(Band::Mid.matches(VOLTAGE_BAND_EDGES, 5.1));
    }

    #[test]
    fn price_bands_are_half_open() {
        assert!(PriceBand::HalfToOne.matches(0.5));
        assert!(!PriceBand::HalfToOne.matches(1.0));
        assert!(PriceBand::OneToTwo.matches(1.0));
        assert!(PriceBand::OverFifty.matches(120.0));
    }
}
