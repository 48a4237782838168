//! Result count and pagination controls for the product list.

use common::catalog_const::PAGE_SIZE;
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::md_navigation_icons::{MdArrowBack, MdArrowForward},
};

use crate::pages::catalog_page::CatalogViewState;

#[component]
pub fn CatalogListControls() -> Element {
    let view_state = use_context::<CatalogViewState>();
    let filtered_products = view_state.filtered_products;
    let result_count = use_memo(move || filtered_products.read().len() as u64);

    rsx! {
        div {
            id: "x-catalog-list-title-row",
            style: "
                display: flex;
                flex-direction: row;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
                align-items: center;
                box-sizing: border-box;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); border-bottom: 1px solid rgb(75, 87, 112);",
                "{result_count()} products found"
            }
            // empty space
            div { style: "flex-grow: 1;" }
            PaginationControls {}
        }
    }
}

#[component]
fn PaginationControls() -> Element {
    let view_state = use_context::<CatalogViewState>();
    let filtered_products = view_state.filtered_products;
    let current_page = view_state.current_page;
    let set_current_page = view_state.set_current_page;

    let max_pages = use_memo(move || {
        let count = filtered_products.read().len() as u64;
        count.div_ceil(PAGE_SIZE).max(1)
    });
    // the filter set can shrink under the current page
    let selected_page = use_memo(move || (*current_page.read() + 1).min(*max_pages.read()));
    let can_go_to_previous_page = use_memo(move || selected_page() > 1);
    let can_go_to_next_page = use_memo(move || selected_page() < *max_pages.read());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 10px;
            ",

            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| { set_current_page(selected_page() - 2); }
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    font-weight: 400;
                    background-color: white;
                    border-radius: 2px;
                    padding: 4px 12px;
                ",
                "{selected_page()}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    "/{*max_pages.read()}"
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| { set_current_page(selected_page()); }
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(
    icon: I,
    label: String,
    disabled: ReadSignal<bool>,
    onclick: Callback<()>,
) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}
