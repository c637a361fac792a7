use api::products_query::ALL_CATEGORIES;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::category_link::CategoryLink;
use crate::components::pico::Grid;

/// "Shop by category" and "Top brands" tile grids.
#[component]
pub fn TopCategoriesAndBrands() -> Element {
    let state = use_context::<AppStateMut>();
    let (categories, brands) = match &*state.home_page.read() {
        Some(page) => (page.categories.clone(), page.brands.clone()),
        None => Default::default(),
    };

    rsx! {
        section {
            class: "top-categories-and-brands",
            h4 { "Shop by Category" }
            Grid {
                for tile in categories {
                    CategoryLink {
                        key: "{tile.id}",
                        category: tile.category.clone(),
                        class: "category-tile",
                        img { src: "{tile.image_url}", alt: "{tile.title}" }
                        span { "{tile.title}" }
                    }
                }
            }
            h4 { "Top Brands" }
            Grid {
                for brand in brands {
                    CategoryLink {
                        key: "{brand.id}",
                        category: ALL_CATEGORIES,
                        class: "brand-tile",
                        img { src: "{brand.image_url}", alt: "{brand.name}" }
                    }
                }
            }
        }
    }
}
