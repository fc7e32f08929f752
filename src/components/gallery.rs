//! Photo gallery section.
//!
//! Renders the carousel around the [`boda_core::Carousel`] state machine.
//! Navigation comes from four places: the prev/next buttons, the
//! indicators, arrow keys while the gallery is on screen, and a single
//! free-running auto-advance interval that asks the state machine whether
//! it may move. All pause/resume policy lives in the state machine; this
//! component only wires events to it.

use std::time::Instant;

use boda_core::{Carousel, AUTO_ADVANCE_PERIOD};
use dioxus::document;
use dioxus::prelude::*;

use crate::components::{LazyImage, Reveal};

/// The gallery photos, in carousel order.
const SLIDES: [(&str, &str); 8] = [
    ("assets/gallery/w1.jpg", "Nuestra primera cita"),
    ("assets/gallery/w2.jpg", "El viaje a la sierra"),
    ("assets/gallery/w3.jpg", "La pedida"),
    ("assets/gallery/w4.jpg", "Un domingo cualquiera"),
    ("assets/gallery/w5.jpg", "Las fiestas del pueblo"),
    ("assets/gallery/w6.jpg", "Bailando en la cocina"),
    ("assets/gallery/w7.jpg", "El atardecer en la playa"),
    ("assets/gallery/w8.jpg", "Preparando la boda"),
];

/// Arrow keys drive the carousel only while the gallery section intersects
/// the visible screen; the default action is suppressed in that case. The
/// in-view check and preventDefault have to happen synchronously in the
/// webview, so this listener runs there and forwards qualifying keys.
const ARROW_KEY_LISTENER_JS: &str = r#"
    document.addEventListener('keydown', (event) => {
        if (event.key !== 'ArrowLeft' && event.key !== 'ArrowRight') return;
        const gallery = document.getElementById('gallery');
        if (!gallery) return;
        const rect = gallery.getBoundingClientRect();
        if (rect.top >= window.innerHeight || rect.bottom <= 0) return;
        event.preventDefault();
        dioxus.send(event.key);
    });
"#;

#[component]
pub fn GallerySection() -> Element {
    let mut carousel: Signal<Option<Carousel>> = use_signal(|| {
        match Carousel::new(SLIDES.len()) {
            Ok(carousel) => Some(carousel),
            Err(e) => {
                tracing::error!(error = %e, "gallery carousel disabled");
                None
            }
        }
    });

    // Auto-advance: one interval for the life of the component. The effect
    // runs once, so a second timer can never be started; suppression is
    // decided inside the state machine on every fire.
    use_effect(move || {
        spawn(async move {
            let mut ticker = tokio::time::interval(AUTO_ADVANCE_PERIOD);
            ticker.tick().await; // the first fire completes immediately; skip it
            loop {
                ticker.tick().await;
                if let Some(state) = carousel.write().as_mut() {
                    state.auto_advance(Instant::now());
                }
            }
        });
    });

    // Keyboard navigation bridge.
    use_effect(move || {
        spawn(async move {
            let mut keys = document::eval(ARROW_KEY_LISTENER_JS);
            loop {
                match keys.recv::<String>().await {
                    Ok(key) => {
                        if let Some(state) = carousel.write().as_mut() {
                            if key == "ArrowLeft" {
                                state.prev();
                            } else {
                                state.next();
                            }
                            state.interact(Instant::now());
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "arrow key listener closed");
                        break;
                    }
                }
            }
        });
    });

    let on_prev = move |_| {
        if let Some(state) = carousel.write().as_mut() {
            state.prev();
            state.interact(Instant::now());
        }
    };
    let on_next = move |_| {
        if let Some(state) = carousel.write().as_mut() {
            state.next();
            state.interact(Instant::now());
        }
    };

    let Some(state) = carousel() else {
        return VNode::empty();
    };
    let current = state.current_index();
    let track_width = state.slide_count() * 100;
    let offset = state.track_offset_percent();

    rsx! {
        section { id: "gallery", class: "gallery-section",
            Reveal {
                h2 { class: "section-header", "Nuestra historia en fotos" }
            }
            div {
                class: "gallery-carousel",
                onmouseenter: move |_| {
                    if let Some(state) = carousel.write().as_mut() {
                        state.pointer_enter();
                    }
                },
                onmouseleave: move |_| {
                    if let Some(state) = carousel.write().as_mut() {
                        state.pointer_leave();
                    }
                },

                div { class: "carousel-viewport",
                    div {
                        class: "carousel-track",
                        style: "width: {track_width}%; transform: translateX({offset}%);",
                        for (index, slide) in SLIDES.iter().enumerate() {
                            div { key: "{index}", class: "carousel-slide",
                                LazyImage { src: slide.0, alt: slide.1 }
                            }
                        }
                    }
                }

                button {
                    class: "carousel-btn carousel-prev",
                    onclick: on_prev,
                    "aria-label": "Foto anterior",
                    "‹"
                }
                button {
                    class: "carousel-btn carousel-next",
                    onclick: on_next,
                    "aria-label": "Foto siguiente",
                    "›"
                }
            }

            div { class: "carousel-indicators",
                for index in 0..SLIDES.len() {
                    button {
                        key: "{index}",
                        class: if index == current { "indicator active" } else { "indicator" },
                        "aria-label": format!("Ir a la foto {}", index + 1),
                        onclick: move |_| {
                            if let Some(state) = carousel.write().as_mut() {
                                if let Err(e) = state.go_to(index, Instant::now()) {
                                    tracing::warn!(error = %e, "indicator navigation rejected");
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
