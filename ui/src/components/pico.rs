//! Reusable, lifetime-free Dioxus components on top of the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use crate::layout::DrawerAnchor;
use crate::layout::DrawerVariant;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

/// Horizontal rule between drawer sections.
#[component]
pub fn Divider() -> Element {
    rsx! { hr { class: "divider" } }
}

//=============================================================================
// Dimming
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct DimmableProps {
    dimmed: bool,
    children: Element,
}

/// A section that can be covered by a [`Dimmer`].
pub fn Dimmable(props: DimmableProps) -> Element {
    let class = if props.dimmed {
        "ui-dimmable dimmed"
    } else {
        "ui-dimmable"
    };
    rsx! {
        section {
            class: "{class}",
            {props.children}
        }
    }
}

/// Translucent overlay over the enclosing [`Dimmable`]. Purely visual.
#[component]
pub fn Dimmer(active: bool) -> Element {
    let class = if active { "ui-dimmer active" } else { "ui-dimmer" };
    rsx! {
        div {
            class: "{class}",
            "aria-hidden": "true",
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn to_class(&self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(optional)]
    class: Option<String>,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let mut classes = vec![props.button_type.to_class()];
    if props.outline {
        classes.push("outline");
    }
    if let Some(extra) = props.class.as_deref() {
        classes.push(extra);
    }
    let class_str = classes
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    rsx! {
        button {
            class: "{class_str}",
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

//=============================================================================
// Drawer
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct DrawerProps {
    variant: DrawerVariant,
    #[props(default)]
    anchor: DrawerAnchor,
    /// Only consulted by the temporary variant.
    open: Signal<bool>,
    children: Element,
}

/// A side panel. The permanent variant is docked and always shown; the
/// temporary variant is an overlay that closes on backdrop click or Escape.
pub fn Drawer(props: DrawerProps) -> Element {
    let mut open = props.open;
    let anchor = props.anchor.as_str();

    match props.variant {
        DrawerVariant::Permanent => rsx! {
            aside {
                class: "drawer drawer-permanent",
                {props.children}
            }
        },
        DrawerVariant::Temporary => rsx! {
            if open() {
                div {
                    class: "drawer-backdrop",
                    tabindex: "-1",
                    onmounted: move |mounted| {
                        spawn(async move {
                            mounted.data.set_focus(true).await.ok();
                        });
                    },
                    onclick: move |_| open.set(false),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Escape {
                            open.set(false);
                        }
                    },
                    // clicks inside the panel must not reach the backdrop
                    aside {
                        class: "drawer drawer-temporary drawer-{anchor}",
                        onclick: |evt| evt.stop_propagation(),
                        {props.children}
                    }
                }
            }
        },
    }
}
