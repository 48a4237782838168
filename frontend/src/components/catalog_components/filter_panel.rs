//! Left panel of the catalog view: facet checklists, band selectors and
//! fine-grained range filters.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowDropDown;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};

use common::filter_options::FilterOptions;
use common::filter_state::{
    Band, CURRENT_BAND_EDGES, Facet, FacetValue, FREQUENCY_BAND_EDGES, PriceBand,
    RangeDimension, VOLTAGE_BAND_EDGES,
};

use crate::components::catalog_components::range_filter_control::RangeFilterControl;
use crate::pages::catalog_page::CatalogViewState;

/// The facet's selectable values together with their display strings,
/// taken from the loaded filter options.
fn facet_options(options: &FilterOptions, facet: Facet) -> Vec<(FacetValue, String)> {
    match facet {
        Facet::Manufacturer => options
            .manufacturers
            .iter()
            .map(|m| (FacetValue::Id(m.id), m.name.clone()))
            .collect(),
        Facet::Feature => options
            .features
            .iter()
            .map(|f| (FacetValue::Id(f.id), f.name.clone()))
            .collect(),
        Facet::Topology => text_options(&options.topologies),
        Facet::DimmingMethod => text_options(&options.dimming_methods),
        Facet::PackageType => text_options(&options.package_types),
        Facet::MountingType => text_options(&options.mounting_types),
        Facet::ChannelCount => text_options(&options.channels),
        Facet::Communication => text_options(&options.communication_types),
    }
}

fn text_options(values: &[String]) -> Vec<(FacetValue, String)> {
    values
        .iter()
        .map(|v| (FacetValue::Text(v.clone()), v.clone()))
        .collect()
}

#[component]
pub fn FilterPanelLeftView() -> Element {
    let view_state = use_context::<CatalogViewState>();
    let filter_state = view_state.filter_state;
    let set_filter_state = view_state.set_filter_state;

    rsx! {
        div {
            id: "x-filter-panel-left-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 2px;
                padding: 10px;
                width: 100%;
                box-sizing: border-box;
            ",

            h2 {
                style: "font-size: 18px; font-weight: 500; color: #1C212D; margin: 4px 0px 8px 0px;",
                "Filters"
            }

            for facet in Facet::ALL {
                FacetSection { facet }
            }

            BandSection {
                title: "Max Input Voltage",
                bands: Band::ALL.iter().map(|b| (*b, b.display_string(VOLTAGE_BAND_EDGES, "V"))).collect::<Vec<_>>(),
                selected: filter_state.read().voltage_band,
                onselect: move |band| {
                    let mut state = filter_state.read().clone();
                    state.voltage_band = band;
                    set_filter_state(state);
                },
            }
            BandSection {
                title: "Max Output Current",
                bands: Band::ALL.iter().map(|b| (*b, b.display_string(CURRENT_BAND_EDGES, "mA"))).collect::<Vec<_>>(),
                selected: filter_state.read().current_band,
                onselect: move |band| {
                    let mut state = filter_state.read().clone();
                    state.current_band = band;
                    set_filter_state(state);
                },
            }
            BandSection {
                title: "Switching Frequency",
                bands: Band::ALL.iter().map(|b| (*b, b.display_string(FREQUENCY_BAND_EDGES, "kHz"))).collect::<Vec<_>>(),
                selected: filter_state.read().frequency_band,
                onselect: move |band| {
                    let mut state = filter_state.read().clone();
                    state.frequency_band = band;
                    set_filter_state(state);
                },
            }

            PriceBandSection {}

            h2 {
                style: "font-size: 18px; font-weight: 500; color: #1C212D; margin: 12px 0px 8px 0px;",
                "Parametric Ranges"
            }
            for dimension in [
                RangeDimension::InputVoltage,
                RangeDimension::OutputVoltage,
                RangeDimension::OutputCurrent,
                RangeDimension::SwitchingFrequency,
            ] {
                RangeFilterControl { dimension }
            }
        }
    }
}

#[component]
fn FacetSection(facet: Facet) -> Element {
    let view_state = use_context::<CatalogViewState>();
    let filter_state = view_state.filter_state;
    let set_filter_state = view_state.set_filter_state;
    let filter_options = view_state.filter_options;

    let mut is_expanded = use_signal(|| false);
    let options = use_memo(move || facet_options(&filter_options.read(), facet));
    let selected_count =
        use_memo(move || filter_state.read().selected_facet_values(facet).len());

    if options.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                background: white;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                margin-bottom: 6px;
            ",

            button {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 6px;
                    padding: 8px 10px;
                    background: transparent;
                    border: none;
                    cursor: pointer;
                    font-size: 15px;
                    color: #1C212D;
                    width: 100%;
                    text-align: left;
                ",
                onclick: move |_| {
                    *is_expanded.write() ^= true;
                },
                span { style: "flex-grow: 1;", "{facet.display_name()}" }
                if selected_count() > 0 {
                    span {
                        style: "
                            background: #4F46E5;
                            color: white;
                            font-size: 12px;
                            border-radius: 9999px;
                            padding: 1px 8px;
                        ",
                        "{selected_count()}"
                    }
                }
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px;" }
            }

            if is_expanded() {
                div {
                    style: "
                        display: flex;
                        flex-direction: column;
                        padding: 0px 10px 8px 10px;
                        max-height: 260px;
                        overflow-y: auto;
                    ",
                    for (value, label) in options.read().iter().cloned() {
                        FacetValueRow { facet, value, label }
                    }
                }
            }
        }
    }
}

#[component]
fn FacetValueRow(facet: Facet, value: FacetValue, label: String) -> Element {
    let view_state = use_context::<CatalogViewState>();
    let filter_state = view_state.filter_state;
    let set_filter_state = view_state.set_filter_state;

    let is_selected = {
        let value = value.clone();
        use_memo(move || filter_state.read().is_facet_value_selected(facet, &value))
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 3px 0px;
                font-size: 14px;
                color: #111827;
                cursor: pointer;
            ",
            onclick: move |_| {
                let mut state = filter_state.read().clone();
                state.toggle_facet_value(facet, value.clone());
                set_filter_state(state);
            },
            if is_selected() {
                Icon { icon: MdCheckBox, style: "width: 18px; height: 18px; color: #4F46E5;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 18px; height: 18px; color: #6B7280;" }
            }
            "{label}"
        }
    }
}

#[component]
fn BandSection(
    title: String,
    bands: Vec<(Band, String)>,
    selected: Option<Band>,
    onselect: Callback<Option<Band>>,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                background: white;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                padding: 8px 10px;
                margin-bottom: 6px;
            ",
            span { style: "font-size: 15px; color: #1C212D;", "{title}" }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 4px;",
                for (band, label) in bands {
                    BandChip {
                        label: label.clone(),
                        is_selected: selected == Some(band),
                        onclick: move |_| {
                            // clicking the selected band deselects it
                            if selected == Some(band) {
                                onselect(None);
                            } else {
                                onselect(Some(band));
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn BandChip(label: String, is_selected: bool, onclick: Callback<()>) -> Element {
    let background = if is_selected { "#4F46E5" } else { "#F5F6F8" };
    let color = if is_selected { "white" } else { "#111827" };
    rsx! {
        button {
            style: "
                font-size: 13px;
                border-radius: 9999px;
                padding: 3px 10px;
                background: {background};
                color: {color};
                border: 1px solid #D1D5DB;
                cursor: pointer;
            ",
            onclick: move |_| onclick(()),
            "{label}"
        }
    }
}

#[component]
fn PriceBandSection() -> Element {
    let view_state = use_context::<CatalogViewState>();
    let filter_state = view_state.filter_state;
    let set_filter_state = view_state.set_filter_state;

    let selected = filter_state.read().price_band;

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                background: white;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                padding: 8px 10px;
                margin-bottom: 6px;
            ",
            span { style: "font-size: 15px; color: #1C212D;", "Unit Price (USD)" }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 4px;",
                for band in PriceBand::ALL {
                    BandChip {
                        label: band.display_string(),
                        is_selected: selected == Some(band),
                        onclick: move |_| {
                            let mut state = filter_state.read().clone();
                            state.price_band = if selected == Some(band) { None } else { Some(band) };
                            set_filter_state(state);
                        },
                    }
                }
            }
        }
    }
}
