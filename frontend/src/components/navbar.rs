//! Top navigation bar component.

use dioxus::prelude::*;

use common::filter_state::FilterState;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::{MdHome, MdInfoOutline};
use dioxus_free_icons::icons::md_hardware_icons::MdMemory;
use dioxus_free_icons::{Icon, IconShape};


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id: "x-nav-container",

            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-top-bar",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 28px;
                    width: 100%;
                    height: 60px;
                    background-color: #1C212D;
                    padding: 0px 24px;
                    box-sizing: border-box;
                    flex-shrink: 0;
                ",

                NavbarLogo {},
                NavbarLinks {},
            },

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-height: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            span {
                style: "color: white; font-size: 24px; font-weight: 600; letter-spacing: -0.01em; text-decoration: none;",
                span { style: "color:#6D8DFF;", "Lumida" }
                span { " Semiconductor" }
            }
        }
    }
}

#[component]
fn NavbarLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: row;
                gap: 20px;
                align-items: center;
            ",
            NavLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
            NavLink { to: Route::catalog_page_from_filters(FilterState::default()), icon: MdMemory, label: "LED Driver ICs" }
            NavLink { to: Route::AboutPage { }, icon: MdInfoOutline, label: "About" }
        }
    }
}

#[component]
fn NavLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 6px;
                    color: white;
                    font-size: 16px;
                ",
                Icon { icon: icon, style: "width: 20px; height: 20px;" }
                "{label}"
            }
        }
    }
}
