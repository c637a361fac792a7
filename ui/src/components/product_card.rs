use api::product::Product;
use dioxus::prelude::*;

use crate::components::pico::Card;

#[component]
pub fn ProductCard(product: Product) -> Element {
    rsx! {
        Card {
            img {
                class: "product-image",
                src: "{product.image_url}",
                alt: "{product.name}",
                loading: "lazy",
            }
            footer {
                strong { "{product.brand}" }
                p { class: "product-name", "{product.name}" }
                p { class: "product-price", "{product.display_price()}" }
            }
        }
    }
}
