//! Hero section.
//!
//! Full-height opener with the couple's names, the configured wedding date,
//! and a scroll indicator that smooth-scrolls down to the invitation text.

use boda_core::config::WEDDING;
use dioxus::document;
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    let scroll_to_invitation = move |_| {
        spawn(async move {
            let _ = document::eval(
                "const section = document.getElementById('invitation'); \
                 if (section) section.scrollIntoView({ behavior: 'smooth' });",
            )
            .await;
        });
    };

    rsx! {
        header { class: "hero",
            div { class: "hero-content fade-in",
                p { class: "hero-kicker", "Nos casamos" }
                h1 { class: "hero-names",
                    "Lucía"
                    span { class: "amp", "&" }
                    "Mateo"
                }
                div { class: "hero-date",
                    span { class: "date-day", "{WEDDING.day}" }
                    span { class: "date-month", "{WEDDING.month_name}" }
                    span { class: "date-year", "{WEDDING.year}" }
                }
            }
            button {
                class: "scroll-indicator",
                onclick: scroll_to_invitation,
                "aria-label": "Bajar a la invitación",
                "⌄"
            }
        }
    }
}
