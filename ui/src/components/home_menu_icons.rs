use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::category_link::CategoryLink;

/// Strip of category shortcut icons at the top of the home page.
#[component]
pub fn HomeMenuIcons() -> Element {
    let state = use_context::<AppStateMut>();
    let icons = state
        .home_page
        .read()
        .as_ref()
        .map(|page| page.menu_icons.clone())
        .unwrap_or_default();

    rsx! {
        nav {
            class: "home-menu-icons",
            for icon in icons {
                CategoryLink {
                    key: "{icon.id}",
                    category: icon.category.clone(),
                    class: "home-menu-icon",
                    img { src: "{icon.image_url}", alt: "{icon.title}" }
                    span { "{icon.title}" }
                }
            }
        }
    }
}
