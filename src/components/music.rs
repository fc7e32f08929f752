//! Background music control.
//!
//! A floating toggle over a hidden looped audio element. Playback has to go
//! through the webview because the host may refuse play() without a user
//! gesture; a refusal is tolerated and logged, never fatal.

use dioxus::document;
use dioxus::prelude::*;

const MUSIC_SRC: &str = "assets/musica-ambiental.mp3";

/// Quiet enough not to be intrusive.
const TRY_PLAY_JS: &str = r#"
    const audio = document.getElementById('background-music');
    if (!audio) {
        dioxus.send(false);
    } else {
        audio.volume = 0.3;
        audio.play().then(() => dioxus.send(true)).catch(() => dioxus.send(false));
    }
"#;

const PAUSE_JS: &str = r#"
    const audio = document.getElementById('background-music');
    if (audio) audio.pause();
"#;

#[component]
pub fn MusicControl() -> Element {
    let mut playing = use_signal(|| false);

    let toggle = move |_| {
        spawn(async move {
            if playing() {
                let _ = document::eval(PAUSE_JS).await;
                playing.set(false);
            } else {
                let mut request = document::eval(TRY_PLAY_JS);
                match request.recv::<bool>().await {
                    Ok(true) => playing.set(true),
                    Ok(false) => {
                        tracing::info!("music playback blocked; waiting for another tap");
                    }
                    Err(e) => tracing::warn!(error = %e, "music playback request failed"),
                }
            }
        });
    };

    rsx! {
        audio {
            id: "background-music",
            src: MUSIC_SRC,
            preload: "auto",
            r#loop: true,
        }
        button {
            class: "music-btn",
            onclick: toggle,
            "aria-label": if playing() { "Pausar música" } else { "Reproducir música" },
            span {
                class: if playing() { "music-icon playing" } else { "music-icon" },
                if playing() { "♫" } else { "♪" }
            }
        }
    }
}
