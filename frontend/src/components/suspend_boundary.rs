use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Suspense plus error boundary in one wrapper; suspended children render
/// as a centered loading indicator instead.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color: #4B5770; font-size: 22px; padding: 10px; margin: 15px;",
            "Loading catalog data..."
        }
    }
}
