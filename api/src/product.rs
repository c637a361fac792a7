//! Products returned by a filtered products query.

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub brand: String,
    pub image_url: String,
    /// Price in the smallest currency unit (cents).
    pub price_minor: u64,
}

impl Product {
    /// Formats the price with two decimal places, e.g. `12.50`.
    pub fn display_price(&self) -> String {
        format!("{}.{:02}", self.price_minor / 100, self.price_minor % 100)
    }
}

/// One page of query results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
}

impl ProductPage {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_price_pads_cents() {
        let product = Product {
            id: 1,
            name: "Slim fit shirt".to_string(),
            brand: "Roadster".to_string(),
            image_url: "/img/1.jpg".to_string(),
            price_minor: 1205,
        };
        assert_eq!(product.display_price(), "12.05");
    }
}
