//! Countdown section.
//!
//! Drives the [`boda_core::Countdown`] state machine on a one-second tokio
//! interval and renders the remaining time as four zero-padded fields. When
//! the wedding date passes the interval stops for good, the section goes
//! urgent, and the finale overlay takes over: it tries to autoplay the
//! celebration video and falls back to visible manual controls plus a hint
//! if the host refuses.

use boda_core::config::WEDDING;
use boda_core::countdown::pad2;
use boda_core::{Countdown, CountdownTick, TimeRemaining, TICK_PERIOD};
use chrono::Local;
use dioxus::document;
use dioxus::prelude::*;

use crate::components::Reveal;

const FINALE_VIDEO_SRC: &str = "assets/nuestra-historia.mp4";

const PLAY_FINALE_JS: &str = r#"
    const video = document.getElementById('finale-video');
    if (!video) {
        dioxus.send(false);
    } else {
        video.play().then(() => dioxus.send(true)).catch(() => dioxus.send(false));
    }
"#;

#[component]
pub fn CountdownSection() -> Element {
    let mut remaining = use_signal(TimeRemaining::zero);
    let mut urgent = use_signal(|| false);
    let mut finished = use_signal(|| false);
    let mut show_controls = use_signal(|| false);
    let mut show_hint = use_signal(|| false);

    // Tick immediately, then every second until the target passes. An
    // invalid configured date disables the whole section: no ticker runs
    // and the display stays frozen.
    use_effect(move || {
        spawn(async move {
            let target = match WEDDING.target() {
                Ok(target) => target,
                Err(e) => {
                    tracing::error!(error = %e, "countdown disabled");
                    return;
                }
            };
            let mut countdown = Countdown::new(target);
            let mut ticker = tokio::time::interval(TICK_PERIOD);
            loop {
                ticker.tick().await;
                match countdown.tick(Local::now().naive_local()) {
                    CountdownTick::Counting(time) => {
                        remaining.set(time);
                        urgent.set(time.is_urgent());
                    }
                    CountdownTick::Elapsed { just_completed } => {
                        remaining.set(TimeRemaining::zero());
                        urgent.set(true);
                        if just_completed {
                            finished.set(true);
                        }
                        break;
                    }
                }
            }
        });
    });

    // Once the overlay is up, try to start the video. Blocked autoplay is a
    // recoverable failure: surface the controls and the hint instead.
    use_effect(move || {
        if finished() {
            spawn(async move {
                let mut request = document::eval(PLAY_FINALE_JS);
                match request.recv::<bool>().await {
                    Ok(true) => tracing::info!("finale video playing"),
                    _ => {
                        tracing::warn!("finale autoplay blocked; exposing manual controls");
                        show_controls.set(true);
                        show_hint.set(true);
                    }
                }
            });
        }
    });

    let time = remaining();

    rsx! {
        section {
            id: "countdown",
            class: if urgent() { "countdown-section countdown-urgent" } else { "countdown-section" },
            Reveal {
                h2 { class: "section-header", "Faltan" }
                div { class: "countdown-grid",
                    CountUnit { value: time.days, label: "Días" }
                    CountUnit { value: time.hours, label: "Horas" }
                    CountUnit { value: time.minutes, label: "Minutos" }
                    CountUnit { value: time.seconds, label: "Segundos" }
                }
            }
        }

        div {
            class: if finished() { "wedding-end-overlay active" } else { "wedding-end-overlay" },
            "aria-hidden": if finished() { "false" } else { "true" },
            h2 { class: "wedding-end-title", "¡Ya nos casamos!" }
            video {
                id: "finale-video",
                class: "finale-video",
                src: FINALE_VIDEO_SRC,
                preload: "auto",
                controls: show_controls(),
            }
            p {
                class: "wedding-end-hint",
                hidden: !show_hint(),
                "Pulsa play para revivir el día con nosotros"
            }
        }
    }
}

/// One digit field. Keyed on its value so the element remounts on every
/// change and the 200ms pulse animation replays.
#[component]
fn CountUnit(value: u64, label: &'static str) -> Element {
    rsx! {
        div { class: "count-unit",
            span { key: "{value}", class: "count-value", "{pad2(value)}" }
            span { class: "count-label", "{label}" }
        }
    }
}
