//! Scroll-triggered entry animation wrapper.
//!
//! Wraps a block in a `fade-in-up` container and flips it to `visible` the
//! first time it intersects the viewport. After that first intersection the
//! handler goes quiet, matching the observe-once behavior of the page.

use dioxus::prelude::*;

#[component]
pub fn Reveal(children: Element) -> Element {
    let mut seen = use_signal(|| false);

    rsx! {
        div {
            class: if seen() { "fade-in-up visible" } else { "fade-in-up" },
            onvisible: move |evt| {
                if !seen() {
                    if let Ok(true) = evt.data().is_intersecting() {
                        seen.set(true);
                    }
                }
            },
            {children}
        }
    }
}
