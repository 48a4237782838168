use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;

use common::product::Product;

use crate::api::catalog_api::fetch_product;
use crate::components::product_view_components::spec_section::{CopyButton, SpecGroup, SpecItem};
use crate::components::suspend_boundary::SuspendWrapper;

/// Product detail page: the full datasheet-style view of one part.
#[component]
pub fn ProductDetailPage(product_id: u64) -> Element {
    rsx! {
        Title { "LED Driver IC Details" }
        SuspendWrapper {
            ProductDetailLoader { product_id }
        }
    }
}

#[component]
fn ProductDetailLoader(product_id: ReadSignal<u64>) -> Element {
    let mut product = use_resource(move || fetch_product(*product_id.read()));
    use_effect(move || {
        let _ = product_id.read();
        product.clear();
        product.restart();
    });

    let product = product.read();
    match product.as_ref() {
        None => rsx! {
            div { style: "padding: 20px;", "Loading product..." }
        },
        Some(Err(e)) => rsx! {
            div { style: "padding: 20px; color: darkred;", "Failed to load the product: {e}" }
        },
        Some(Ok(product)) => rsx! {
            ProductDetailView { product: product.clone() }
        },
    }
}

#[component]
fn ProductDetailView(product: ReadSignal<Product>) -> Element {
    rsx! {
        div {
            id: "x-product-detail-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                width: 100%;
                height: 100%;
                padding: 24px 32px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            ProductTitleBar { product }

            if let Some(description) = product.read().description.clone() {
                div {
                    style: "font-size: 15px; color: #374151; max-width: 900px; line-height: 1.6;",
                    "{description}"
                }
            }

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 16px;
                    align-items: flex-start;
                ",
                ElectricalSpecGroup { product }
                PhysicalSpecGroup { product }
                ControlSpecGroup { product }
                ComplianceSpecGroup { product }
            }
        }
    }
}

#[component]
fn ProductTitleBar(product: ReadSignal<Product>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 14px;
                flex-wrap: wrap;
            ",
            h1 {
                style: "font-size: 32px; font-weight: 500; color: #0F172A; margin: 0;",
                "{product.read().name}"
            }
            if let Some(manufacturer) = product.read().manufacturer.clone() {
                span {
                    style: "font-size: 18px; color: #4F46E5;",
                    "{manufacturer.name}"
                }
            }
            if let Some(subtitle) = product.read().subtitle.clone() {
                span {
                    style: "font-size: 16px; color: #6B7280;",
                    "{subtitle}"
                }
            }

            // empty space
            div { style: "flex-grow: 1;" }

            if let Some(part_number) = product.read().part_number.clone() {
                CopyButton {
                    text: part_number.clone(),
                    label: "Copy {part_number}",
                }
            }
            if product.read().datasheet_url.is_some() {
                a {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 6px;
                        height: 32px;
                        padding: 0 10px;
                        font-size: 13px;
                        border-radius: 8px;
                        background: #4F46E5;
                        color: white;
                        border: 1px solid #4F46E5;
                        cursor: pointer;
                        text-decoration: none;
                    ",
                    target: "_blank",
                    href: "/_download_datasheet/{product.read().id}",
                    Icon { icon: MdFileDownload, style: "width: 16px; height: 16px;" }
                    "Datasheet"
                }
            }
        }
    }
}

#[component]
fn ElectricalSpecGroup(product: ReadSignal<Product>) -> Element {
    let product = product.read();
    let specs = &product.specifications;
    rsx! {
        SpecGroup {
            title: "Electrical Characteristics",
            if let Some(range) = &specs.input_voltage {
                SpecItem { label: "Input Voltage", value: range.display_string() }
            }
            if let Some(range) = &specs.output_voltage {
                SpecItem { label: "Output Voltage", value: range.display_string() }
            }
            if let Some(range) = &specs.output_current {
                SpecItem { label: "Output Current", value: range.display_string() }
            }
            if let Some(range) = &specs.switching_frequency {
                SpecItem { label: "Switching Frequency", value: range.display_string() }
            }
            if let Some(price) = product.estimated_price {
                SpecItem { label: "Est. Unit Price", value: format!("${price:.2}") }
            }
        }
    }
}

#[component]
fn PhysicalSpecGroup(product: ReadSignal<Product>) -> Element {
    let product = product.read();
    let specs = &product.specifications;
    rsx! {
        SpecGroup {
            title: "Package",
            if let Some(package) = &specs.package_type {
                SpecItem { label: "Package Type", value: package.clone() }
            }
            if let Some(mounting) = &specs.mounting_type {
                SpecItem { label: "Mounting Type", value: mounting.clone() }
            }
            if let Some(channels) = &specs.channels {
                SpecItem { label: "Channels", value: channels.clone() }
            }
            if specs.internal_switch == Some(true) {
                SpecItem { label: "Internal Switch", value: "Yes".to_string() }
            }
            if specs.thermal_pad == Some(true) {
                SpecItem { label: "Thermal Pad", value: "Yes".to_string() }
            }
        }
    }
}

#[component]
fn ControlSpecGroup(product: ReadSignal<Product>) -> Element {
    let product = product.read();
    let specs = &product.specifications;
    rsx! {
        SpecGroup {
            title: "Topology & Control",
            if !specs.topology.is_empty() {
                SpecItem { label: "Topology", value: specs.topology.join(", ") }
            }
            if !specs.dimming_method.is_empty() {
                SpecItem { label: "Dimming Method", value: specs.dimming_method.join(", ") }
            }
            if !specs.communication_interface.is_empty() {
                SpecItem { label: "Communication", value: specs.communication_interface.join(", ") }
            }
            if !specs.features.is_empty() {
                SpecItem {
                    label: "Features",
                    value: specs.features.iter().map(|f| f.name.clone()).collect::<Vec<_>>().join(", "),
                }
            }
        }
    }
}

#[component]
fn ComplianceSpecGroup(product: ReadSignal<Product>) -> Element {
    let product = product.read();
    let specs = &product.specifications;
    rsx! {
        SpecGroup {
            title: "Compliance & Applications",
            if !specs.certifications.is_empty() {
                SpecItem { label: "Certifications", value: specs.certifications.join(", ") }
            }
            if !specs.applications.is_empty() {
                SpecItem { label: "Applications", value: specs.applications.join(", ") }
            }
        }
    }
}
