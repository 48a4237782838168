use dioxus::prelude::*;

use common::product::{ManufacturerRef, Product, Specifications};

use crate::api::catalog_api::{delete_product, fetch_product, save_product};

/// Admin page for creating, editing and deleting product rows. Spec data is
/// edited as raw JSON, matching the column it is stored in.
#[component]
pub fn AdminProductPage() -> Element {
    let mut product_id = use_signal(|| 0_u64);
    let mut name = use_signal(String::new);
    let mut subtitle = use_signal(String::new);
    let mut part_number = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut manufacturer_id = use_signal(|| 0_u64);
    let mut manufacturer_name = use_signal(String::new);
    let mut estimated_price = use_signal(String::new);
    let mut datasheet_url = use_signal(String::new);
    let mut specifications_json = use_signal(|| "{}".to_string());
    let mut status = use_signal(String::new);

    let do_load = move |_| async move {
        match fetch_product(*product_id.read()).await {
            Ok(product) => {
                name.set(product.name);
                subtitle.set(product.subtitle.unwrap_or_default());
                part_number.set(product.part_number.unwrap_or_default());
                description.set(product.description.unwrap_or_default());
                manufacturer_id.set(product.manufacturer.as_ref().map(|m| m.id).unwrap_or(0));
                manufacturer_name
                    .set(product.manufacturer.map(|m| m.name).unwrap_or_default());
                estimated_price.set(
                    product
                        .estimated_price
                        .map(|p| p.to_string())
                        .unwrap_or_default(),
                );
                datasheet_url.set(product.datasheet_url.unwrap_or_default());
                specifications_json.set(
                    serde_json::to_string_pretty(&product.specifications)
                        .unwrap_or("{}".to_string()),
                );
                status.set(format!("Loaded product {}", product_id.read()));
            }
            Err(e) => status.set(format!("Load failed: {e}")),
        }
    };

    let do_save = move |_| async move {
        let specifications =
            match serde_json::from_str::<Specifications>(&specifications_json.read()) {
                Ok(specifications) => specifications,
                Err(e) => {
                    status.set(format!("Specifications JSON is invalid: {e}"));
                    return;
                }
            };
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
        let manufacturer = if *manufacturer_id.read() > 0 {
            Some(ManufacturerRef {
                id: *manufacturer_id.read(),
                name: manufacturer_name.read().clone(),
            })
        } else {
            None
        };
        let product = Product {
            id: *product_id.read(),
            name: name.read().clone(),
            subtitle: non_empty(subtitle.read().clone()),
            part_number: non_empty(part_number.read().clone()),
            description: non_empty(description.read().clone()),
            manufacturer,
            estimated_price: estimated_price.read().parse::<f64>().ok(),
            datasheet_url: non_empty(datasheet_url.read().clone()),
            image_url: None,
            specifications,
        };
        match save_product(product).await {
            Ok(()) => status.set(format!("Saved product {}", product_id.read())),
            Err(e) => status.set(format!("Save failed: {e}")),
        }
    };

    let do_delete = move |_| async move {
        match delete_product(*product_id.read()).await {
            Ok(()) => status.set(format!("Deleted product {}", product_id.read())),
            Err(e) => status.set(format!("Delete failed: {e}")),
        }
    };

    rsx! {
        Title { "Lumida Semiconductor - Product Admin" }
        div {
            id: "x-admin-product-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 10px;
                width: 100%;
                height: 100%;
                padding: 28px 36px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            h1 {
                style: "font-size: 30px; font-weight: 500; color: #0F172A; margin: 0;",
                "Product Admin"
            }

            div {
                style: "display:flex; flex-direction: row; gap: 8px; align-items: center;",
                AdminFieldLabel { label: "Product ID" }
                input {
                    r#type: "number",
                    value: "{product_id}",
                    style: "width: 120px; font-size: 14px; padding: 5px 8px; border: 1px solid #D1D5DB; border-radius: 6px;",
                    oninput: move |e| {
                        if let Ok(id) = e.value().parse::<u64>() {
                            product_id.set(id);
                        }
                    },
                }
                button {
                    style: "height: 32px; padding: 0 12px; font-size: 14px; border-radius: 8px; background: white; border: 1px solid #D1D5DB; cursor: pointer;",
                    onclick: do_load,
                    "Load"
                }
            }

            AdminTextField { label: "Name", value: name }
            AdminTextField { label: "Subtitle", value: subtitle }
            AdminTextField { label: "Part Number", value: part_number }
            AdminTextField { label: "Description", value: description }
            div {
                style: "display:flex; flex-direction: row; gap: 8px; align-items: center;",
                AdminFieldLabel { label: "Manufacturer ID" }
                input {
                    r#type: "number",
                    value: "{manufacturer_id}",
                    style: "width: 120px; font-size: 14px; padding: 5px 8px; border: 1px solid #D1D5DB; border-radius: 6px;",
                    oninput: move |e| {
                        if let Ok(id) = e.value().parse::<u64>() {
                            manufacturer_id.set(id);
                        }
                    },
                }
            }
            AdminTextField { label: "Manufacturer Name", value: manufacturer_name }
            AdminTextField { label: "Est. Price (USD)", value: estimated_price }
            AdminTextField { label: "Datasheet URL", value: datasheet_url }

            div {
                style: "display:flex; flex-direction: column; gap: 4px;",
                AdminFieldLabel { label: "Specifications (JSON)" }
                textarea {
                    value: "{specifications_json}",
                    rows: 14,
                    style: "width: 640px; font-size: 13px; font-family: monospace; padding: 8px; border: 1px solid #D1D5DB; border-radius: 6px;",
                    oninput: move |e| specifications_json.set(e.value()),
                }
            }

            div {
                style: "display:flex; flex-direction: row; gap: 10px;",
                button {
                    style: "height: 36px; padding: 0 18px; font-size: 15px; border-radius: 8px; background: #4F46E5; color: white; border: none; cursor: pointer;",
                    onclick: do_save,
                    "Save"
                }
                button {
                    style: "height: 36px; padding: 0 18px; font-size: 15px; border-radius: 8px; background: white; color: darkred; border: 1px solid darkred; cursor: pointer;",
                    onclick: do_delete,
                    "Delete"
                }
            }

            if !status.read().is_empty() {
                div {
                    style: "font-size: 14px; color: #374151; padding: 6px 0px;",
                    "{status}"
                }
            }
        }
    }
}

#[component]
fn AdminFieldLabel(label: String) -> Element {
    rsx! {
        span {
            style: "font-size: 14px; color: #6B7280; min-width: 160px;",
            "{label}"
        }
    }
}

#[component]
fn AdminTextField(label: String, value: Signal<String>) -> Element {
    let mut value = value;
    rsx! {
        div {
            style: "display:flex; flex-direction: row; gap: 8px; align-items: center;",
            AdminFieldLabel { label }
            input {
                r#type: "text",
                value: "{value}",
                style: "width: 420px; font-size: 14px; padding: 5px 8px; border: 1px solid #D1D5DB; border-radius: 6px;",
                oninput: move |e| value.set(e.value()),
            }
        }
    }
}
