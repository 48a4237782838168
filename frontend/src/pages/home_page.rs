use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_hardware_icons::MdMemory;

use common::filter_state::FilterState;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Lumida Semiconductor - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                CatalogSearchCard {}
                DistributionCard {}
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to" }
            span { style: "color:#4F46E5;", "Lumida Semiconductor" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 30px;
                line-height: 1.6;
                max-width: 680px;
                font-weight: 500;
            ",
            "Compare LED driver ICs across manufacturers. Filter by topology, dimming method, package, electrical ratings and more to find the right part for your design."
        }
    }
}

#[component]
fn CatalogSearchCard() -> Element {
    rsx! {
        div {
            id: "x-card-catalog-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 280px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "
                    font-size: 30px;
                    font-weight: 500;
                ",
                "Parametric Search"
            }

            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Search the full LED driver IC catalog by part number, manufacturer or keyword, then narrow down with parametric filters."
            }

            div { style: "height: 8px; padding-top: 7px; margin-top:7px; border-top: 1px solid white; width: 100%; " }

            div {
                style: "
                    font-size: 16px;
                    color: rgba(255,255,255,0.9);
                    width: 100%;
                ",
                "*Type a part number or keyword below and hit Enter to start."
            }
            CatalogSearchInput {}
        }
    }
}

#[component]
fn CatalogSearchInput() -> Element {
    let n2 = navigator();
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Search LED driver ICs",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        let filters = FilterState { query: search_q.read().clone(), ..Default::default() };
                        n2.push( Route::catalog_page_from_filters(filters) );
                    }
                },
            }
        }
    }
}

#[component]
fn DistributionCard() -> Element {
    rsx! {
        div {
            id: "x-card-distribution",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                width: 520px;
                min-height: 280px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #0B7A2B 0%, #23A340 60%, #178E35 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 10px;
                    font-size: 26px;
                    font-weight: 500;
                ",
                Icon { icon: MdMemory, style: "width: 30px; height: 30px;" }
                "Authorized Distribution"
            }

            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.6;
                    color: rgba(255,255,255,0.96);
                    max-width: 510px;
                ",
                "We stock constant-current and switching LED driver ICs from leading manufacturers, with datasheets and full parametric data for every part we carry."
            }
        }
    }
}
