//! This crate contains the shared storefront types and all fullstack server functions.

#[cfg(not(target_arch = "wasm32"))]
mod backend;
pub mod filter_attributes;
pub mod home_page;
pub mod prefs;
pub mod product;
pub mod products_query;
pub mod selected_filter_attributes;

use dioxus::prelude::*;
use filter_attributes::FilterAttributeCatalog;
use home_page::HomePage;
use prefs::storefront_prefs::StorefrontPrefs;
use product::ProductPage;
use products_query::ProductsQuery;

pub type ApiError = anyhow::Error;

/// Retrieves the storefront presentation settings.
///
/// Read from env vars on every call; there is no settings file.
#[post("/api/get_storefront_prefs")]
pub async fn get_storefront_prefs() -> Result<StorefrontPrefs, ApiError> {
    Ok(StorefrontPrefs::default())
}

#[post("/api/load_home_page")]
pub async fn load_home_page() -> Result<HomePage, ApiError> {
    backend::get_json(backend::HOME_PATH, &[]).await
}

#[post("/api/load_filter_attributes")]
pub async fn load_filter_attributes() -> Result<FilterAttributeCatalog, ApiError> {
    backend::get_json(backend::FILTER_ATTRIBUTES_PATH, &[]).await
}

/// Loads one page of products.
///
/// `query` uses the `category=<cat>::...::page=<n>,<size>` grammar of
/// [`ProductsQuery`]; it is validated here before being forwarded.
#[post("/api/load_filter_products")]
pub async fn load_filter_products(query: String) -> Result<ProductPage, ApiError> {
    let parsed: ProductsQuery = query.parse()?;
    dioxus_logger::tracing::info!("loading products for {}", parsed);

    backend::get_json(backend::PRODUCTS_PATH, &[("q", parsed.to_string())]).await
}
