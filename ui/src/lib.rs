// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod command;
pub mod compat;
mod components;
pub mod hooks;
pub mod layout;
mod screens;
#[cfg(test)]
mod test_support;

use api::products_query::ALL_CATEGORIES;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use hooks::use_breakpoint::use_breakpoint;
use hooks::use_dispatcher::use_store_dispatcher;
use screens::home::HomeScreen;
use screens::products::ProductsScreen;

/// The screens reachable from the header tabs.
#[derive(Clone, PartialEq, Debug, Default)]
enum Screen {
    #[default]
    Home,
    /// Product listing for one category.
    Shop(String),
}

impl Screen {
    fn name(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Shop(_) => "Shop",
        }
    }

    fn is_same_tab(&self, other: &Screen) -> bool {
        matches!(
            (self, other),
            (Screen::Home, Screen::Home) | (Screen::Shop(_), Screen::Shop(_))
        )
    }
}

fn all_tabs() -> [Screen; 2] {
    [Screen::Home, Screen::Shop(ALL_CATEGORIES.to_string())]
}

/// Header navigation. Hovering it dims the home screen.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    let mut state = use_context::<AppStateMut>();

    rsx! {
        nav {
            class: "tab-menu",
            onmouseenter: move |_| state.hover.set(true),
            onmouseleave: move |_| state.hover.set(false),
            ul {
                for screen in all_tabs() {
                    li {
                        a {
                            href: "#",
                            class: {
                                if active_screen.read().is_same_tab(&screen) { "active-tab" } else { "" }
                            },
                            "aria-current": {
                                if active_screen.read().is_same_tab(&screen) { "page" } else { "false" }
                            },
                            onclick: {
                                let screen = screen.clone();
                                move |event: MouseEvent| {
                                    event.prevent_default();
                                    active_screen.set(screen.clone());
                                }
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let storefront_css = r#"
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
    }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        border-bottom: 3px solid var(--pico-primary);
        text-decoration: none;
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- HOME --- */
    .ui-dimmable { position: relative; }
    .ui-dimmer {
        display: none;
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.45);
        z-index: 10;
    }
    .ui-dimmer.active { display: block; }

    .home-menu-icons {
        display: flex;
        justify-content: space-around;
        padding: 0.5rem 0;
    }
    .home-menu-icon {
        display: flex;
        flex-direction: column;
        align-items: center;
        font-size: 0.8rem;
    }
    .home-menu-icon img { width: 48px; height: 48px; }

    .vertical-slider { position: relative; overflow: hidden; }
    .vertical-slider img { width: 100%; display: block; }
    .vertical-slider .slider-controls {
        display: flex;
        justify-content: center;
        align-items: center;
        gap: 0.4rem;
    }
    .slider-dot {
        display: inline-block;
        width: 8px;
        height: 8px;
        border-radius: 50%;
        background: var(--pico-muted-color);
        cursor: pointer;
    }
    .slider-dot.active { background: var(--pico-primary); }

    .top-categories-and-brands .grid img { width: 100%; }

    /* --- FILTERS --- */
    .products-layout { display: flex; gap: 1rem; }
    .products-content { flex: 1; min-width: 0; }
    .product-image { width: 100%; }

    .drawer { width: 260px; overflow-y: auto; padding: 0.5rem; }
    .drawer-permanent { flex-shrink: 0; border-right: 1px solid var(--pico-muted-border-color); }
    [dir="rtl"] .drawer-permanent { border-right: none; border-left: 1px solid var(--pico-muted-border-color); }
    .drawer-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.35);
        z-index: 200;
    }
    .drawer-temporary {
        position: fixed;
        top: 0;
        bottom: 0;
        background: var(--pico-background-color);
    }
    .drawer-temporary.drawer-left { left: 0; }
    .drawer-temporary.drawer-right { right: 0; }

    .filter-drawer-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        font-weight: bold;
    }
    .title-header { margin: 0.5rem 0; }
    .check-box-list { list-style: none; padding: 0; max-height: 14rem; overflow-y: auto; }
    .check-box-list li { list-style: none; }
    .divider { margin: 0.5rem 0; }

    .empty-state { text-align: center; padding: 2rem 1rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{storefront_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let prefs_future = use_server_future(api::get_storefront_prefs)?;

    let body = match &*prefs_future.read() {
        Some(Ok(prefs)) => {
            dioxus_logger::tracing::info!("prefs: {:?}", prefs);
            rsx! {
                LoadedApp {
                    app_state: AppState::new(*prefs),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    let text_direction = app_state.prefs.text_direction();

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let hover = use_signal(|| false);
    let breakpoint = use_breakpoint();
    let catalog = use_signal(|| None);
    let selection = use_signal(Default::default);
    let home_page = use_signal(|| None);
    let products = use_signal(|| None);

    let store = use_context_provider(|| AppStateMut {
        hover,
        breakpoint,
        catalog,
        selection,
        home_page,
        products,
    });
    use_store_dispatcher(store);

    let active_screen = use_signal(Screen::default);
    use_context_provider(|| active_screen);

    rsx! {
        div {
            class: "app-main-container",
            dir: text_direction.as_str(),
            Container {
                header {
                    nav {
                        ul {
                            li {
                                strong { "Shoppers" }
                            }
                        }
                        ul {
                            li {
                                Tabs {
                                    active_screen,
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Home => rsx! {
                            HomeScreen {}
                        },
                        Screen::Shop(category) => rsx! {
                            ProductsScreen {
                                key: "{category}",
                                category,
                            }
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shop_tab_stays_active_for_any_category() {
        let shop = Screen::Shop("women".to_string());
        assert!(shop.is_same_tab(&Screen::Shop(ALL_CATEGORIES.to_string())));
        assert!(!shop.is_same_tab(&Screen::Home));
        assert_eq!(shop.name(), "Shop");
    }
}
