use dioxus::prelude::*;

/// Sets the browser tab title while mounted.
#[component]
pub fn DocumentTitle(title: String) -> Element {
    rsx! {
        document::Title { "{title}" }
    }
}
