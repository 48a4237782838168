use dioxus::prelude::*;

/// About page
#[component]
pub fn AboutPage() -> Element {
    rsx! {
        Title { "Lumida Semiconductor - About" }
        div {
            id: "x-about-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 16px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            h1 {
                style: "font-size: 38px; font-weight: 500; color: #0F172A; margin: 0;",
                "About Lumida Semiconductor"
            }

            div {
                style: "font-size: 18px; line-height: 1.7; color: #111827; max-width: 760px;",
                p {
                    "Lumida Semiconductor is an authorized distributor of LED driver ICs. We carry constant-current sink drivers, switching regulators and linear drivers from leading manufacturers, and we publish full parametric data for every part in stock."
                }
                p {
                    "The parametric search on this site runs over the complete catalog: filter by manufacturer, topology, dimming method, package, electrical ratings, certifications and price to shortlist candidates for your design, then download the datasheet straight from the part page."
                }
                p {
                    "For volume pricing, samples or parts not yet listed, contact our sales team."
                }
            }
        }
    }
}
