//! Top bar of the catalog view: text search, quick toggles, clear-all.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_content_icons::MdClear;

use crate::pages::catalog_page::CatalogViewState;

#[component]
pub fn QuickFilterBar() -> Element {
    let view_state = use_context::<CatalogViewState>();
    let filter_state = view_state.filter_state;
    let set_filter_state = view_state.set_filter_state;

    let active_count = use_memo(move || filter_state.read().active_filter_count());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 12px 16px;
                width: 100%;
            ",

            SearchInput {}

            QuickToggle {
                label: "> 40 V Input",
                is_on: filter_state.read().high_voltage,
                ontoggle: move |_| {
                    let mut state = filter_state.read().clone();
                    state.high_voltage = !state.high_voltage;
                    set_filter_state(state);
                },
            }
            QuickToggle {
                label: "AEC-Q100",
                is_on: filter_state.read().aec_q100,
                ontoggle: move |_| {
                    let mut state = filter_state.read().clone();
                    state.aec_q100 = !state.aec_q100;
                    set_filter_state(state);
                },
            }
            QuickToggle {
                label: "Automotive",
                is_on: filter_state.read().automotive,
                ontoggle: move |_| {
                    let mut state = filter_state.read().clone();
                    state.automotive = !state.automotive;
                    set_filter_state(state);
                },
            }
            QuickToggle {
                label: "Internal Switch",
                is_on: filter_state.read().internal_switch,
                ontoggle: move |_| {
                    let mut state = filter_state.read().clone();
                    state.internal_switch = !state.internal_switch;
                    set_filter_state(state);
                },
            }
            QuickToggle {
                label: "Thermal Pad",
                is_on: filter_state.read().thermal_pad,
                ontoggle: move |_| {
                    let mut state = filter_state.read().clone();
                    state.thermal_pad = !state.thermal_pad;
                    set_filter_state(state);
                },
            }

            // empty space
            div { style: "flex-grow: 1;" }

            if active_count() > 0 {
                button {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 4px;
                        height: 34px;
                        padding: 0 12px;
                        font-size: 14px;
                        border-radius: 8px;
                        background: white;
                        color: #111827;
                        border: 1px solid #D1D5DB;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        let mut state = filter_state.read().clone();
                        state.clear();
                        set_filter_state(state);
                    },
                    Icon { icon: MdClear, style: "width: 16px; height: 16px;" }
                    "Clear All ({active_count()})"
                }
            }
        }
    }
}

#[component]
fn SearchInput() -> Element {
    let view_state = use_context::<CatalogViewState>();
    let filter_state = view_state.filter_state;
    let set_filter_state = view_state.set_filter_state;

    let mut draft_query = use_signal(|| filter_state.peek().query.clone());

    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                background-color: white;
                border: 1px solid #D1D5DB;
                border-radius: 9999px;
                padding: 6px 14px;
                height: 38px;
                width: 320px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 18px; height: 18px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Part number, manufacturer, keyword",
                value: "{draft_query}",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *draft_query.write() = e.value();
                    let mut state = filter_state.peek().clone();
                    state.query = e.value();
                    set_filter_state(state);
                },
            }
        }
    }
}

#[component]
fn QuickToggle(label: String, is_on: bool, ontoggle: Callback<()>) -> Element {
    let background = if is_on { "#4F46E5" } else { "white" };
    let color = if is_on { "white" } else { "#111827" };
    rsx! {
        button {
            style: "
                height: 34px;
                padding: 0 12px;
                font-size: 14px;
                border-radius: 9999px;
                background: {background};
                color: {color};
                border: 1px solid #D1D5DB;
                cursor: pointer;
            ",
            onclick: move |_| ontoggle(()),
            "{label}"
        }
    }
}
