//! Root application component.
//!
//! A single page, assembled top to bottom: hero, invitation text,
//! countdown, gallery, reception details. The music control floats above
//! everything. No router — there is nowhere else to go.

use dioxus::prelude::*;

use crate::components::{
    CountdownSection, GallerySection, Hero, InvitationSection, MusicControl, ReceptionSection,
};
use crate::theme::GLOBAL_STYLES;

#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }

        MusicControl {}
        Hero {}

        main {
            InvitationSection {}
            CountdownSection {}
            GallerySection {}
            ReceptionSection {}
        }

        footer { class: "footer",
            p { "Lucía & Mateo — 21 de Marzo de 2026" }
        }
    }
}
