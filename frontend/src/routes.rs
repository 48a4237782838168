use dioxus::prelude::*;

use common::filter_state::FilterState;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::about_page::AboutPage;
use crate::pages::admin_product_page::AdminProductPage;
use crate::pages::catalog_page::CatalogPage;
use crate::pages::home_page::HomePage;
use crate::pages::product_detail_page::ProductDetailPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/products/:filters")]
    CatalogPage {
        filters: UrlParam<FilterState>,
    },


    #[route("/products/item/:product_id")]
    ProductDetailPage { product_id: u64 },


    #[route("/about")]
    AboutPage {},

    #[route("/admin/product")]
    AdminProductPage {},

}

impl Route {
    pub fn catalog_page_from_filters(filters: FilterState) -> Self {
        Self::CatalogPage {
            filters: UrlParam::from(filters),
        }
    }
}
