use dioxus::prelude::*;

/// Section heading used inside the filter drawer.
#[component]
pub fn TitleHeader(
    title: String,
    #[props(default = "normal".to_string())] font_weight: String,
    #[props(default = "1rem".to_string())] font_size: String,
) -> Element {
    rsx! {
        h6 {
            class: "title-header",
            style: "font-weight: {font_weight}; font-size: {font_size}; margin-bottom: 0.5rem;",
            "{title}"
        }
    }
}
