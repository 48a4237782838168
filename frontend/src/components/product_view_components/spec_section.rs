//! Grouped specification display for the product detail page.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_content_icons::MdContentCopy;

#[component]
pub fn SpecGroup(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 2px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                padding: 14px 16px;
                min-width: 280px;
            ",
            h2 {
                style: "font-size: 17px; font-weight: 500; color: #1C212D; margin: 0px 0px 8px 0px; border-bottom: 1px solid #E5E7EB; padding-bottom: 6px;",
                "{title}"
            }
            {children}
        }
    }
}

/// One label/value row. Rows with no value are simply not rendered by the
/// caller, so the groups only show what the part actually specifies.
#[component]
pub fn SpecItem(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: baseline;
                gap: 10px;
                padding: 3px 0px;
                font-size: 14px;
            ",
            span { style: "color: #6B7280; min-width: 160px;", "{label}" }
            span { style: "color: #111827;", "{value}" }
        }
    }
}

#[component]
pub fn CopyButton(text: String, label: String) -> Element {
    let do_copy = use_callback(move |text: String| {
        let _r = web_sys::window().map(|w| w.navigator().clipboard().write_text(&text));
        dioxus::logger::tracing::info!("Copied to clipboard: {:#?}", text);
    });

    rsx! {
        button {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                height: 32px;
                padding: 0 10px;
                font-size: 13px;
                border-radius: 8px;
                background: white;
                color: #111827;
                border: 1px solid #D1D5DB;
                cursor: pointer;
            ",
            onclick: move |_| do_copy(text.clone()),
            Icon { icon: MdContentCopy, style: "width: 16px; height: 16px;" }
            "{label}"
        }
    }
}
