//! One product row in the catalog listing.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::MdOpenInNew, md_content_icons::MdContentCopy,
        md_file_icons::MdFileDownload,
    },
};

use common::product::Product;

use crate::routes::Route;

#[component]
pub fn ProductCard(product: ReadSignal<Product>) -> Element {
    let spec_summary = use_memo(move || {
        let product = product.read();
        let specs = &product.specifications;
        let mut parts = Vec::new();
        if !specs.topology.is_empty() {
            parts.push(specs.topology.join(" / "));
        }
        if let Some(package) = &specs.package_type {
            parts.push(package.clone());
        }
        if let Some(range) = &specs.input_voltage {
            parts.push(format!("Vin {}", range.display_string()));
        }
        if let Some(range) = &specs.output_current {
            parts.push(format!("Iout {}", range.display_string()));
        }
        parts.join("  ·  ")
    });

    rsx! {
        div {
            id: "x-product-card-{product.read().id}",
            style: "
                display: flex;
                flex-direction: row;
                align-items: flex-start;
                gap: 14px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                padding: 14px 16px;
                box-shadow: 0 2px 6px rgba(0,0,0,0.06);
            ",

            div {
                style: "display: flex; flex-direction: column; gap: 4px; flex-grow: 1;",

                div {
                    style: "display: flex; flex-direction: row; align-items: baseline; gap: 10px;",
                    Link {
                        to: Route::ProductDetailPage { product_id: product.read().id },
                        span {
                            style: "font-size: 20px; font-weight: 500; color: #1C212D;",
                            "{product.read().name}"
                        }
                    }
                    if let Some(part_number) = product.read().part_number.clone() {
                        span {
                            style: "font-size: 14px; color: #6B7280; font-family: monospace;",
                            "{part_number}"
                        }
                    }
                    if let Some(manufacturer) = product.read().manufacturer.clone() {
                        span {
                            style: "font-size: 14px; color: #4F46E5;",
                            "{manufacturer.name}"
                        }
                    }
                }

                if let Some(subtitle) = product.read().subtitle.clone() {
                    div {
                        style: "font-size: 14px; color: #374151;",
                        "{subtitle}"
                    }
                }

                if !spec_summary.read().is_empty() {
                    div {
                        style: "font-size: 13px; color: #6B7280;",
                        "{spec_summary}"
                    }
                }
            }

            if let Some(price) = product.read().estimated_price {
                div {
                    style: "font-size: 16px; font-weight: 500; color: #0B7A2B; white-space: nowrap;",
                    "${price:.2}"
                }
            }

            CardActionButtons { product }
        }
    }
}

#[component]
fn CardActionButtons(product: ReadSignal<Product>) -> Element {
    let do_copy_part_number = use_callback(move |_: ()| {
        let text = {
            let product = product.read();
            product.part_number.clone().unwrap_or(product.name.clone())
        };
        let _r = web_sys::window().map(|w| w.navigator().clipboard().write_text(&text));
        dioxus::logger::tracing::info!("Part number copied to clipboard: {:#?}", text);
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 4px;",

            ActionButton {
                label: "Copy part number",
                onclick: move |_| do_copy_part_number(()),
                Icon { icon: MdContentCopy, style: "width: 20px; height: 20px;" }
            }

            a {
                style: "
                    width: 36px;
                    height: 36px;
                    cursor: pointer;
                    border: 1px solid #D1D5DB;
                    border-radius: 8px;
                    background: white;
                    color: black;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1px;
                    margin: 1px;
                ",
                target: "_blank",
                href: Route::ProductDetailPage { product_id: product.read().id }.to_string(),
                title: "Open in new tab",
                Icon { icon: MdOpenInNew, style: "width: 20px; height: 20px;" }
            }

            if product.read().datasheet_url.is_some() {
                a {
                    style: "
                        width: 36px;
                        height: 36px;
                        cursor: pointer;
                        border: 1px solid #D1D5DB;
                        border-radius: 8px;
                        background: white;
                        color: black;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1px;
                        margin: 1px;
                    ",
                    target: "_blank",
                    href: "/_download_datasheet/{product.read().id}",
                    title: "Download datasheet",
                    Icon { icon: MdFileDownload, style: "width: 20px; height: 20px;" }
                }
            }
        }
    }
}

#[component]
fn ActionButton(label: String, onclick: Callback<()>, children: Element) -> Element {
    rsx! {
        button {
            style: "
                width: 36px;
                height: 36px;
                cursor: pointer;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                background: white;
                color: black;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 1px;
                margin: 1px;
            ",
            title: "{label}",
            onclick: move |_| onclick(()),
            {children}
        }
    }
}
