//! Tracks the viewport width class.

// Conditionally export the correct module based on the target platform.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(all(
    not(target_arch = "wasm32"),
    any(feature = "dioxus-desktop", target_os = "android", target_os = "ios")
))]
pub use self::webview::*;

// Fallback for any other platform (like a server) where there is no viewport.
#[cfg(all(
    not(target_arch = "wasm32"),
    not(feature = "dioxus-desktop"),
    not(any(target_os = "android", target_os = "ios"))
))]
pub use self::fallback::*;

/// # WebAssembly (WASM) Implementation
/// Reads `window.innerWidth` through `web_sys` and listens for `resize`.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use dioxus::prelude::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::layout::Breakpoint;

    fn current() -> Option<Breakpoint> {
        let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
        Some(Breakpoint::from_width(width))
    }

    pub fn use_breakpoint() -> Signal<Breakpoint> {
        let mut breakpoint = use_signal(Breakpoint::default);

        use_effect(move || {
            if let Some(bp) = current() {
                breakpoint.set(bp);
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let on_resize = Closure::<dyn FnMut()>::new(move || {
                if let Some(bp) = current() {
                    if *breakpoint.peek() != bp {
                        breakpoint.set(bp);
                    }
                }
            });
            if window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                .is_ok()
            {
                // the listener lives as long as the page
                on_resize.forget();
            }
        });

        breakpoint
    }
}

/// # Desktop / Mobile Implementation
/// Runs a small script in the webview that reports the width now and on every
/// `resize`.
#[cfg(all(
    not(target_arch = "wasm32"),
    any(feature = "dioxus-desktop", target_os = "android", target_os = "ios")
))]
mod webview {
    use dioxus::prelude::*;

    use crate::layout::Breakpoint;

    const WIDTH_REPORTER: &str = r#"
        dioxus.send(window.innerWidth);
        window.addEventListener("resize", () => dioxus.send(window.innerWidth));
        await new Promise(() => {});
    "#;

    pub fn use_breakpoint() -> Signal<Breakpoint> {
        let mut breakpoint = use_signal(Breakpoint::default);

        use_effect(move || {
            spawn(async move {
                let mut eval = document::eval(WIDTH_REPORTER);
                while let Ok(width) = eval.recv::<f64>().await {
                    let bp = Breakpoint::from_width(width);
                    if *breakpoint.peek() != bp {
                        breakpoint.set(bp);
                    }
                }
            });
        });

        breakpoint
    }
}

/// # Fallback/Server Implementation
/// No viewport to measure; server renders use the default breakpoint.
#[cfg(all(
    not(target_arch = "wasm32"),
    not(feature = "dioxus-desktop"),
    not(any(target_os = "android", target_os = "ios"))
))]
mod fallback {
    use dioxus::prelude::*;

    use crate::layout::Breakpoint;

    pub fn use_breakpoint() -> Signal<Breakpoint> {
        use_signal(Breakpoint::default)
    }
}
