//! Static invitation and reception sections.
//!
//! Plain content blocks wrapped in [`Reveal`] so they fade in as the guest
//! scrolls. The reception photo loads lazily like the gallery slides.

use dioxus::prelude::*;

use crate::components::{LazyImage, Reveal};

#[component]
pub fn InvitationSection() -> Element {
    rsx! {
        section { id: "invitation",
            Reveal {
                h2 { class: "section-header", "Queremos celebrarlo contigo" }
                p { class: "body-text",
                    "Después de tantos años caminando juntos, ha llegado el día "
                    "de dar el paso más bonito. Nos encantaría que nos acompañaras "
                    "en una jornada llena de amor, risas y buena mesa."
                }
            }
        }
    }
}

#[component]
pub fn ReceptionSection() -> Element {
    rsx! {
        section { id: "reception",
            Reveal {
                h2 { class: "section-header", "La celebración" }
                div { class: "detail-card",
                    h3 { "Ceremonia" }
                    p { class: "body-text", "Ermita de San Frutos · 15:00" }
                }
                div { class: "detail-card",
                    h3 { "Banquete y fiesta" }
                    p { class: "body-text",
                        "Finca El Olivar · a partir de las 17:30. "
                        "Habrá autobuses de vuelta a medianoche y a las tres."
                    }
                }
                div { class: "reception-photo",
                    LazyImage {
                        src: "assets/finca-el-olivar.jpg",
                        alt: "La finca donde celebraremos el banquete",
                    }
                }
            }
        }
    }
}
