//! Lazily loaded image.
//!
//! Renders a styled placeholder until the slot first scrolls into view, and
//! only then attaches the real image source, so offscreen photos never
//! start downloading.

use dioxus::prelude::*;

#[component]
pub fn LazyImage(#[props(into)] src: String, #[props(into)] alt: String) -> Element {
    let mut load = use_signal(|| false);

    rsx! {
        if load() {
            img { src, alt }
        } else {
            div {
                class: "lazy-placeholder",
                onvisible: move |evt| {
                    if let Ok(true) = evt.data().is_intersecting() {
                        load.set(true);
                    }
                },
            }
        }
    }
}
