use std::time::Duration;

use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::compat;

const AUTO_ADVANCE: Duration = Duration::from_secs(5);

pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn previous_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

fn dot_class(index: usize, shown: usize) -> &'static str {
    if index == shown {
        "active"
    } else {
        ""
    }
}

/// Promotional carousel. Advances on its own every few seconds.
#[component]
pub fn VerticalSlider() -> Element {
    let state = use_context::<AppStateMut>();
    let mut current = use_signal(|| 0usize);

    let slides = state
        .home_page
        .read()
        .as_ref()
        .map(|page| page.carousel.clone())
        .unwrap_or_default();
    let len = slides.len();

    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        loop {
            compat::sleep(AUTO_ADVANCE).await;
            let len = state
                .home_page
                .peek()
                .as_ref()
                .map(|page| page.carousel.len())
                .unwrap_or(0);
            let next = next_slide(*current.peek(), len);
            current.set(next);
        }
    });

    // a reload may shrink the carousel under the current index
    let shown = if len == 0 { 0 } else { current() % len };

    rsx! {
        div {
            class: "vertical-slider",
            if let Some(slide) = slides.get(shown) {
                figure {
                    key: "{slide.id}",
                    img { src: "{slide.image_url}", alt: "" }
                    if let Some(caption) = &slide.caption {
                        figcaption { "{caption}" }
                    }
                }
            }
            if len > 1 {
                div {
                    class: "slider-controls",
                    button {
                        class: "secondary outline",
                        "aria-label": "Previous",
                        onclick: move |_| current.set(previous_slide(shown, len)),
                        "‹"
                    }
                    for i in 0..len {
                        span {
                            key: "{i}",
                            class: "slider-dot {dot_class(i, shown)}",
                            onclick: move |_| current.set(i),
                        }
                    }
                    button {
                        class: "secondary outline",
                        "aria-label": "Next",
                        onclick: move |_| current.set(next_slide(shown, len)),
                        "›"
                    }
                }
            }
        }
    }
}
