use dioxus::prelude::*;

use common::catalog_const::PAGE_SIZE;
use common::filter_engine::filter_catalog;
use common::filter_options::{Catalog, FilterOptions};
use common::filter_state::FilterState;
use common::product::Product;

use crate::api::catalog_api::fetch_catalog;
use crate::components::catalog_components::active_filter_badges::ActiveFilterBadges;
use crate::components::catalog_components::catalog_list_controls::CatalogListControls;
use crate::components::catalog_components::filter_panel::FilterPanelLeftView;
use crate::components::catalog_components::product_card::ProductCard;
use crate::components::catalog_components::quick_filter_bar::QuickFilterBar;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;


// char-based: the query is user input and may contain multi-byte text
fn title_ellipsis(query: String) -> String {
    if query.chars().count() > 20 {
        query.chars().take(18).collect::<String>() + "..."
    } else {
        query
    }
}

/// Catalog page: the filterable LED driver IC listing. The complete filter
/// state travels in the route, so any filtered view is a shareable URL.
#[component]
pub fn CatalogPage(filters: UrlParam<FilterState>) -> Element {
    rsx! {
        Title { "LED Driver ICs: {title_ellipsis(filters.0.query.clone())}" }
        CatalogPageRootComponent {
            filters: filters.0.clone(),
        }
    }
}

/// Everything the catalog child components need, provided as context: the
/// loaded catalog, the current filter state and the mutation callbacks.
#[derive(Copy, Clone)]
pub struct CatalogViewState {
    pub catalog: ReadSignal<Option<Result<Catalog, ServerFnError>>>,
    pub filter_state: ReadSignal<FilterState>,
    pub set_filter_state: Callback<FilterState>,
    pub filter_options: Memo<FilterOptions>,
    pub filtered_products: Memo<Vec<Product>>,
    pub current_page: ReadSignal<u64>,
    pub set_current_page: Callback<u64>,
}

#[component]
fn CatalogPageRootComponent(filters: ReadSignal<FilterState>) -> Element {
    let catalog = use_resource(move || fetch_catalog());

    let filter_options = use_memo(move || {
        let catalog = catalog.read();
        match catalog.as_ref() {
            Some(Ok(catalog)) => catalog.filter_options.clone(),
            _ => FilterOptions::default(),
        }
    });

    // The filter run itself: pure and synchronous, re-evaluated whenever
    // either the catalog or the filter state changes.
    let filtered_products = use_memo(move || {
        let catalog = catalog.read();
        let Some(Ok(catalog)) = catalog.as_ref() else {
            return Vec::new();
        };
        filter_catalog(&catalog.products, &filters.read())
    });

    let current_page = use_signal(|| 0_u64);
    let set_current_page = Callback::new(move |page: u64| {
        let mut current_page = current_page;
        current_page.set(page);
    });

    // Filter changes replace the route in place and jump back to page one.
    let set_filter_state = Callback::new(move |state: FilterState| {
        set_current_page(0);
        navigator().replace(Route::CatalogPage { filters: state.into() });
    });

    use_context_provider(move || CatalogViewState {
        catalog: catalog.into(),
        filter_state: filters,
        set_filter_state,
        filter_options,
        filtered_products,
        current_page: current_page.into(),
        set_current_page,
    });

    rsx! {
        div {
            id: "x-catalog-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: row;
            "#,
            div {
                id: "x-catalog-left-panel",
                style: "
                    height: 100%;
                    background-color: #ECEEF2;
                    flex-shrink: 0;
                    width: 320px;
                    overflow-y: auto;
                    border-right: 1px solid rgb(164, 164, 164);
                ",
                SuspendWrapper { FilterPanelLeftView {} }
            }
            div {
                id: "x-catalog-right-panel",
                style: "
                    height: 100%;
                    flex-grow: 1;
                    min-width: 400px;
                    display: flex;
                    flex-direction: column;
                ",
                div {
                    id: "x-catalog-quick-filter-bar",
                    style: "
                        border-bottom: 1px solid rgb(164, 164, 164);
                        background-color: #F8FCFF;
                        flex-shrink: 0;
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        width: 100%;
                    ",
                    QuickFilterBar {}
                }
                ActiveFilterBadges {}
                div {
                    style: "
                        flex-grow: 1;
                        width: 100%;
                        overflow-y: auto;
                    ",
                    SuspendWrapper { CatalogResultsView {} }
                }
            }
        }
    }
}

#[component]
fn CatalogResultsView() -> Element {
    let view_state = use_context::<CatalogViewState>();

    let filtered_products = view_state.filtered_products;
    let current_page = view_state.current_page;
    let page_products = use_memo(move || {
        let products = filtered_products.read();
        let start = (*current_page.read() * PAGE_SIZE) as usize;
        products
            .iter()
            .skip(start)
            .take(PAGE_SIZE as usize)
            .cloned()
            .collect::<Vec<_>>()
    });

    let catalog = view_state.catalog.read();
    match catalog.as_ref() {
        None => return rsx! { div { style: "padding: 20px;", "Loading products..." } },
        Some(Err(e)) => return rsx! {
            div { style: "padding: 20px; color: darkred;", "Failed to load the catalog: {e}" }
        },
        Some(Ok(_)) => {}
    }
    drop(catalog);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 12px;
            ",
            CatalogListControls {}
            if page_products.read().is_empty() {
                div {
                    style: "padding: 30px; color: #4B5770; font-size: 20px;",
                    "No products match the current filters."
                }
            }
            for product in page_products.read().iter().cloned() {
                ProductCard { product }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_ellipsis_passes_short_queries_through() {
        assert_eq!(title_ellipsis("buck driver".to_string()), "buck driver");
    }

    #[test]
    fn title_ellipsis_truncates_long_ascii_queries() {
        let query = "a".repeat(25);
        let shortened = title_ellipsis(query);
        assert_eq!(shortened, "a".repeat(18) + "...");
    }

    #[test]
    fn title_ellipsis_cuts_multi_byte_queries_on_char_boundaries() {
        // 21 chars with multi-byte text straddling the cut point
        let query = "a".repeat(17) + "매크로블";
        let shortened = title_ellipsis(query);
        assert_eq!(shortened, "a".repeat(17) + "매" + "...");
    }

    #[test]
    fn title_ellipsis_keeps_multi_byte_queries_under_the_limit_whole() {
        // 20 chars but more than 20 bytes
        let query = "a".repeat(17) + "é..";
        assert_eq!(title_ellipsis(query.clone()), query);
    }
}
