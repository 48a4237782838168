//! Row of removable chips, one per active filter.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use common::filter_options::FilterOptions;
use common::filter_state::{
    CURRENT_BAND_EDGES, Facet, FacetValue, FilterState, FREQUENCY_BAND_EDGES,
    VOLTAGE_BAND_EDGES,
};

use crate::pages::catalog_page::CatalogViewState;

fn facet_value_label(options: &FilterOptions, facet: Facet, value: &FacetValue) -> String {
    match value {
        FacetValue::Text(text) => text.clone(),
        FacetValue::Id(id) => {
            let name = match facet {
                Facet::Manufacturer => options
                    .manufacturers
                    .iter()
                    .find(|m| m.id == *id)
                    .map(|m| m.name.clone()),
                Facet::Feature => options
                    .features
                    .iter()
                    .find(|f| f.id == *id)
                    .map(|f| f.name.clone()),
                _ => None,
            };
            name.unwrap_or_else(|| format!("#{id}"))
        }
    }
}

/// Each badge is the label to show plus the filter state that results from
/// removing it.
fn collect_badges(state: &FilterState, options: &FilterOptions) -> Vec<(String, FilterState)> {
    let mut badges = Vec::new();

    if state.high_voltage {
        let mut next = state.clone();
        next.high_voltage = false;
        badges.push(("> 40 V Input".to_string(), next));
    }
    if state.aec_q100 {
        let mut next = state.clone();
        next.aec_q100 = false;
        badges.push(("AEC-Q100".to_string(), next));
    }
    if state.automotive {
        let mut next = state.clone();
        next.automotive = false;
        badges.push(("Automotive".to_string(), next));
    }
    if state.internal_switch {
        let mut next = state.clone();
        next.internal_switch = false;
        badges.push(("Internal Switch".to_string(), next));
    }
    if state.thermal_pad {
        let mut next = state.clone();
        next.thermal_pad = false;
        badges.push(("Thermal Pad".to_string(), next));
    }

    for (facet, values) in &state.facets {
        for value in values {
            let mut next = state.clone();
            next.toggle_facet_value(*facet, value.clone());
            let label = format!(
                "{}: {}",
                facet.display_name(),
                facet_value_label(options, *facet, value)
            );
            badges.push((label, next));
        }
    }

    if let Some(band) = state.voltage_band {
        let mut next = state.clone();
        next.voltage_band = None;
        badges.push((format!("Vin {}", band.display_string(VOLTAGE_BAND_EDGES, "V")), next));
    }
    if let Some(band) = state.current_band {
        let mut next = state.clone();
        next.current_band = None;
        badges.push((format!("Iout {}", band.display_string(CURRENT_BAND_EDGES, "mA")), next));
    }
    if let Some(band) = state.frequency_band {
        let mut next = state.clone();
        next.frequency_band = None;
        badges.push((format!("Fsw {}", band.display_string(FREQUENCY_BAND_EDGES, "kHz")), next));
    }
    if let Some(band) = state.price_band {
        let mut next = state.clone();
        next.price_band = None;
        badges.push((format!("Price {}", band.display_string()), next));
    }

    for range in &state.ranges {
        if !range.is_active() {
            continue;
        }
        let mut next = state.clone();
        if let Some(next_range) = next.range_mut(range.dimension) {
            next_range.reset();
        }
        let label = format!(
            "{}: {} - {} {}",
            range.dimension.display_name(),
            range.low,
            range.high,
            range.dimension.unit()
        );
        badges.push((label, next));
    }

    badges
}

#[component]
pub fn ActiveFilterBadges() -> Element {
    let view_state = use_context::<CatalogViewState>();
    let filter_state = view_state.filter_state;
    let set_filter_state = view_state.set_filter_state;
    let filter_options = view_state.filter_options;

    let badges =
        use_memo(move || collect_badges(&filter_state.read(), &filter_options.read()));

    if badges.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-active-filter-badges",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 6px;
                padding: 8px 16px;
                background-color: #F5F6F8;
                border-bottom: 1px solid rgb(164, 164, 164);
            ",
            for (label, next_state) in badges.read().iter().cloned() {
                button {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 4px;
                        font-size: 13px;
                        border-radius: 9999px;
                        padding: 3px 10px;
                        background: white;
                        color: #111827;
                        border: 1px solid #4F46E5;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        set_filter_state(next_state.clone());
                    },
                    "{label}"
                    Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
                }
            }
        }
    }
}
