// File: src/components/empty_state.rs
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
}

/// Placeholder shown where a list would be when it has no entries.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h4 { "{props.title}" }

            if let Some(desc) = props.description {
                p { "{desc}" }
            }
        }
    }
}
