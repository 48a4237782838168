//! Min/max input pair for one parametric range dimension.

use dioxus::prelude::*;

use common::filter_options::{DomainBounds, FilterOptions};
use common::filter_state::{FilterState, RangeDimension, RangeFilter};

use crate::pages::catalog_page::CatalogViewState;

fn domain_for(options: &FilterOptions, dimension: RangeDimension) -> DomainBounds {
    match dimension {
        RangeDimension::InputVoltage => options.input_voltage,
        RangeDimension::OutputVoltage => options.output_voltage,
        RangeDimension::OutputCurrent => options.output_current,
        RangeDimension::SwitchingFrequency => options.switching_frequency,
    }
}

/// Narrows the state's range for `dimension`, creating it at full domain
/// first if the state was built without ranges.
fn narrow_range(
    state: &mut FilterState,
    options: &FilterOptions,
    dimension: RangeDimension,
    low: f64,
    high: f64,
) {
    if state.range_mut(dimension).is_none() {
        let domain = domain_for(options, dimension);
        state
            .ranges
            .push(RangeFilter::full_domain(dimension, domain.min, domain.max));
    }
    if let Some(range) = state.range_mut(dimension) {
        range.narrow(low, high);
    }
}

#[component]
pub fn RangeFilterControl(dimension: RangeDimension) -> Element {
    let view_state = use_context::<CatalogViewState>();
    let filter_state = view_state.filter_state;
    let set_filter_state = view_state.set_filter_state;
    let filter_options = view_state.filter_options;

    let domain = use_memo(move || domain_for(&filter_options.read(), dimension));
    let selection = use_memo(move || {
        let state = filter_state.read();
        match state.ranges.iter().find(|r| r.dimension == dimension) {
            Some(range) => (range.low, range.high, range.is_active()),
            None => {
                let domain = domain();
                (domain.min, domain.max, false)
            }
        }
    });

    let (low, high, is_active) = selection();

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
            div {
                style: "display: flex; flex-direction: row; align-items: center;",
                span {
                    style: "font-size: 15px; color: #1C212D; flex-grow: 1;",
                    "{dimension.display_name()} ({dimension.unit()})"
                }
                if is_active {
                    button {
                        style: "
                            font-size: 12px;
                            color: #4F46E5;
                            background: transparent;
                            border: none;
                            cursor: pointer;
                        ",
                        onclick: move |_| {
                            let mut state = filter_state.read().clone();
                            if let Some(range) = state.range_mut(dimension) {
                                range.reset();
                            }
                            set_filter_state(state);
                        },
                        "Reset"
                    }
                }
            }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 6px;",
                input {
                    r#type: "number",
                    value: "{low}",
                    min: "{domain().min}",
                    max: "{domain().max}",
                    style: "width: 90px; font-size: 13px; padding: 3px 6px; border: 1px solid #D1D5DB; border-radius: 6px;",
                    onchange: move |e| {
                        let Ok(new_low) = e.value().parse::<f64>() else { return };
                        let mut state = filter_state.read().clone();
                        let (_, high, _) = selection();
                        narrow_range(&mut state, &filter_options.read(), dimension, new_low, high);
                        set_filter_state(state);
                    },
                }
                span { style: "font-size: 13px; color: #6B7280;", "to" }
                input {
                    r#type: "number",
                    value: "{high}",
                    min: "{domain().min}",
                    max: "{domain().max}",
                    style: "width: 90px; font-size: 13px; padding: 3px 6px; border: 1px solid #D1D5DB; border-radius: 6px;",
                    onchange: move |e| {
                        let Ok(new_high) = e.value().parse::<f64>() else { return };
                        let mut state = filter_state.read().clone();
                        let (low, _, _) = selection();
                        narrow_range(&mut state, &filter_options.read(), dimension, low, new_high);
                        set_filter_state(state);
                    },
                }
            }
        }
    }
}
