//! Error boundary components for rendering failures.

use dioxus::prelude::*;

/// Top-level boundary: replaces the whole page with the error dump and a
/// way back to the home page.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; align-items: flex-start; padding: 20px;",
                        h1 {
                            style: "color:red; font-size: 44px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 10px;",
                            "Something went wrong",
                        }
                        p {
                            style: "color:darkred; font-size: 22px; margin: 10px;",
                            "Boundary: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color:blue; font-size: 22px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 10px;",
                            "Return to Home Page"
                        }
                        pre {
                            style: "color:black; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 10px; text-wrap: auto; max-width: 90%; overflow-x: auto;",
                            "{_err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

/// In-place boundary for one component subtree, with a retry button that
/// clears the captured errors.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error_txt = match _err.error() {
                    Some(err) => format!("{:#?}", err.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color:blue; font-size: 20px; border: 1px solid blue; padding: 8px 16px; border-radius: 5px; margin: 10px; cursor: pointer; background: white;",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h1 {
                style: "color:red; font-size: 28px; border: 1px solid red; padding: 8px; border-radius: 5px; margin: 5px;",
                "Component Error",
            }

            pre {
                style: "color:darkred; border: 1px solid red; padding: 8px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
