use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::Screen;

#[derive(Props, Clone, PartialEq)]
pub struct CategoryLinkProps {
    /// Category handed to the products screen.
    pub category: String,

    #[props(optional)]
    pub class: Option<String>,

    pub children: Element,
}

/// An anchor that switches to the shop screen filtered by `category`.
#[component]
pub fn CategoryLink(props: CategoryLinkProps) -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();
    let category = props.category.clone();

    rsx! {
        a {
            href: "#",
            class: "{props.class.as_deref().unwrap_or(\"\")}",
            onclick: move |evt: MouseEvent| {
                // keep the browser from following "#"
                evt.prevent_default();
                info!("navigating to category {}", category);
                active_screen.set(Screen::Shop(category.clone()));
            },
            {props.children}
        }
    }
}
