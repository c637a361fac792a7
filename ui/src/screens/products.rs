//=============================================================================
// File: src/screens/products.rs
//=============================================================================
use api::products_query::ProductsQuery;
use api::selected_filter_attributes::SelectedFilterAttributes;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::app_state_mut::AppStateMut;
use crate::command::Command;
use crate::components::document_title::DocumentTitle;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Grid;
use crate::components::product_card::ProductCard;
use crate::hooks::use_dispatcher::use_dispatcher;
use crate::screens::filter_nav_bar::FilterNavBar;

/// Query for the first page of `category` narrowed by `selection`. A
/// category the query grammar cannot carry falls back to all categories.
fn products_query(selection: &SelectedFilterAttributes, category: &str) -> ProductsQuery {
    let query = ProductsQuery::from_selection(selection);
    match query.clone().with_category(category) {
        Ok(query) => query,
        Err(e) => {
            warn!("[Products]: {}, listing all categories instead", e);
            query
        }
    }
}

#[component]
pub fn ProductsScreen(category: String) -> Element {
    let state = use_context::<AppStateMut>();
    let dispatcher = use_dispatcher();
    let mut first_run = use_signal(|| true);

    {
        let category = category.clone();
        use_hook(move || {
            info!("[Products]: mounted for category {}", category);
            if state.catalog.peek().is_none() {
                dispatcher.dispatch(Command::LoadFilterAttributes);
            }
            let query = products_query(&state.selection.peek(), &category);
            dispatcher.dispatch(Command::ReloadProducts(query));
        });
    }

    // an emptied selection is reloaded by "clear all" itself
    let effect_category = category.clone();
    use_effect(move || {
        let selection = (state.selection)();
        if *first_run.peek() {
            first_run.set(false);
            return;
        }
        if selection.is_empty() {
            return;
        }
        let query = products_query(&selection, &effect_category);
        debug!("[Products]: selection changed, reloading with {}", query);
        dispatcher.dispatch(Command::ReloadProducts(query));
    });

    let products = state.products.read().clone();

    rsx! {
        DocumentTitle { title: "Shop {category}" }
        div {
            class: "products-layout",
            FilterNavBar {}
            section {
                class: "products-content",
                match products {
                    None => rsx! {
                        progress { class: "products-loading" }
                    },
                    Some(page) if page.is_empty() => rsx! {
                        EmptyState {
                            title: "No products found",
                            description: "Try removing some of the filters.",
                        }
                    },
                    Some(page) => rsx! {
                        p { class: "products-count", "{page.total_count} products" }
                        Grid {
                            for product in page.products {
                                ProductCard { key: "{product.id}", product }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;
    use crate::test_support::sample_catalog;
    use crate::test_support::sample_products;
    use crate::test_support::HarnessProps;
    use crate::test_support::Mounted;
    use crate::test_support::Session;
    use api::filter_attributes::AttributeId;
    use api::product::ProductPage;

    fn shop(category: &str) -> HarnessProps {
        HarnessProps::new(Mounted::Products(category.to_string()))
    }

    #[test]
    fn mount_loads_attributes_and_first_page() {
        let (html, dispatched) = render(shop("all"));
        assert_eq!(
            dispatched,
            vec![
                Command::LoadFilterAttributes,
                Command::ReloadProducts(ProductsQuery::all()),
            ]
        );
        assert!(html.contains("products-loading"));
    }

    #[test]
    fn loaded_attributes_are_not_fetched_again() {
        let props = HarnessProps {
            catalog: Some(sample_catalog()),
            selection: SelectedFilterAttributes {
                brand: Some(AttributeId(22)),
                ..Default::default()
            },
            ..shop("men")
        };
        let (_, dispatched) = render(props);
        let expected = ProductsQuery {
            category: "men".to_string(),
            brand: Some(AttributeId(22)),
            ..ProductsQuery::all()
        };
        assert_eq!(dispatched, vec![Command::ReloadProducts(expected)]);
    }

    #[test]
    fn empty_result_shows_empty_state() {
        let props = HarnessProps {
            products: Some(ProductPage::default()),
            ..shop("all")
        };
        let (html, _) = render(props);
        assert!(html.contains("No products found"));
        assert!(!html.contains("products-loading"));
    }

    #[test]
    fn products_render_as_cards() {
        let props = HarnessProps {
            products: Some(sample_products()),
            ..shop("all")
        };
        let (html, _) = render(props);
        assert!(html.contains("Slim Fit Jeans"));
        assert!(html.contains("12.05"));
        assert!(!html.contains("No products found"));
    }

    #[test]
    fn unusable_category_lists_everything() {
        let (_, dispatched) = render(shop("men::brand=1"));
        assert_eq!(
            dispatched,
            vec![
                Command::LoadFilterAttributes,
                Command::ReloadProducts(ProductsQuery::all()),
            ]
        );
    }

    #[tokio::test]
    async fn selection_change_reloads_products() {
        let mut session = Session::start(HarnessProps {
            catalog: Some(sample_catalog()),
            ..shop("all")
        });
        session.settle().await;
        session.take_dispatched();

        session.update(|mut state| {
            state.selection.set(SelectedFilterAttributes {
                brand: Some(AttributeId(21)),
                ..Default::default()
            })
        });
        session.settle().await;

        let expected = ProductsQuery {
            brand: Some(AttributeId(21)),
            ..ProductsQuery::all()
        };
        assert_eq!(session.take_dispatched(), vec![Command::ReloadProducts(expected)]);
    }

    #[tokio::test]
    async fn emptied_selection_does_not_reload() {
        let mut session = Session::start(HarnessProps {
            catalog: Some(sample_catalog()),
            selection: SelectedFilterAttributes {
                apparel: Some(AttributeId(12)),
                ..Default::default()
            },
            ..shop("all")
        });
        session.settle().await;
        session.take_dispatched();

        session.update(|mut state| state.selection.set(SelectedFilterAttributes::default()));
        session.settle().await;

        assert!(session.take_dispatched().is_empty());
    }
}
