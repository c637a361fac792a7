//! HTTP client for the catalog service behind the storefront.
//!
//! The service owns home page content, the filter attribute catalog and the
//! product index. Its base URL comes from `STOREFRONT_BACKEND_URL`.

use std::env;

use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

use crate::ApiError;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

pub const HOME_PATH: &str = "home";
pub const FILTER_ATTRIBUTES_PATH: &str = "filter";
pub const PRODUCTS_PATH: &str = "products";

pub fn backend_url() -> String {
    normalize_base_url(env::var("STOREFRONT_BACKEND_URL").ok())
}

fn normalize_base_url(value: Option<String>) -> String {
    value
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

async fn client() -> &'static reqwest::Client {
    static CLIENT: OnceCell<reqwest::Client> = OnceCell::const_new();
    CLIENT.get_or_init(|| async { reqwest::Client::new() }).await
}

/// GETs `<base>/<path>` with the given query parameters and decodes the JSON body.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let url = format!("{}/{}", backend_url(), path);
    dioxus_logger::tracing::debug!("backend GET {} {:?}", url, query);

    let resp = client()
        .await
        .get(&url)
        .query(query)
        .send()
        .await?
        .error_for_status()?;

    Ok(resp.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_and_trims() {
        assert_eq!(normalize_base_url(None), DEFAULT_BACKEND_URL);
        assert_eq!(normalize_base_url(Some("  ".to_string())), DEFAULT_BACKEND_URL);
        assert_eq!(
            normalize_base_url(Some("https://shop.example.com/api/".to_string())),
            "https://shop.example.com/api"
        );
    }
}
