use crate::components::{Icon, PlayerIcon};
use crate::playback::{mounted_media, PlaybackProvider, PlayerStore, Subscription, PLAYER_AUDIO_ID};
use crate::theme::Theme;
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

mod controls;
mod panel;
mod styles;

use controls::TransportButton;
use panel::{
    finish_episode, progress_from_time, track_progress, Gesture, PanelView, PlaybackSync, Scrubber,
};
use styles::player_css;

fn dispatch(mut store: Signal<PlayerStore>, mut progress: Signal<u32>, gesture: Gesture) {
    let mut media = mounted_media();
    let moved = gesture.apply(&mut *store.write(), media.as_mut());
    if let Some(seconds) = moved {
        progress.set(seconds);
    }
}

/// Now-playing panel. Playback state comes in through `store`; the only state
/// owned here is the playhead position in whole seconds.
#[component]
pub fn Player(store: Signal<PlayerStore>, theme: Theme) -> Element {
    let mut store = store;
    let mut progress = use_signal(|| 0u32);
    let mut sync = use_signal(PlaybackSync::default);
    let mut progress_subscription = use_signal(|| None::<Subscription>);

    let is_playing = use_memo(move || store.read().is_playing());
    let has_episode = use_memo(move || store.read().current_episode().is_some());

    // Only re-runs when the playing flag flips.
    use_effect(move || {
        let playing = is_playing();
        let mut media = if *has_episode.peek() {
            mounted_media()
        } else {
            None
        };
        if let Some(transition) = sync.write().observe(playing, media.as_mut()) {
            debug!(?transition, "media element synced to playing flag");
        }
    });

    // The audio element goes away with the episode, and so does its listener.
    use_effect(move || {
        if !has_episode() {
            progress_subscription.set(None);
            progress.set(0);
        }
    });

    let state = store.read().snapshot();
    let view = PanelView::new(&state, progress());
    let css = player_css(&theme);
    let buttons = view.controls;

    let on_loaded_metadata = move |_: Event<MediaData>| {
        let Some(mut media) = mounted_media() else {
            return;
        };
        let runtime = Runtime::current();
        let subscription = track_progress(&mut media, move |seconds| {
            let _guard = RuntimeGuard::new(runtime.clone());
            progress.set(seconds);
        });
        // Replacing the guard drops the previous episode's listener.
        progress_subscription.set(Some(subscription));
    };

    let on_ended = move |_: Event<MediaData>| {
        let outcome = finish_episode(&mut *store.write());
        debug!(?outcome, "episode finished");
        progress.set(0);
    };

    let on_scrub = move |evt: Event<FormData>| {
        if let Ok(seconds) = evt.value().parse::<f64>() {
            dispatch(store, progress, Gesture::Scrub(progress_from_time(seconds)));
        }
    };

    rsx! {
        document::Style { "{css}" }
        section { class: "player",
            header { class: "player-header",
                Icon { icon: PlayerIcon::Playing }
                strong { "Now playing" }
            }

            {match &view.episode {
                Some(episode) => rsx! {
                    div { class: "player-current",
                        img { src: "{episode.thumbnail}", alt: "" }
                        strong { "{episode.title}" }
                        span { "{episode.members}" }
                    }
                },
                None => rsx! {
                    div { class: "player-empty",
                        strong { "Pick a podcast to listen to" }
                    }
                },
            }}

            footer { class: if view.is_empty() { "player-footer empty" } else { "player-footer" },
                div { class: "player-progress",
                    span { "{view.elapsed_label}" }
                    div { class: "player-slider",
                        {match view.scrubber {
                            Scrubber::Live { max, value } => rsx! {
                                input {
                                    r#type: "range",
                                    min: "0",
                                    max: "{max}",
                                    value: "{value}",
                                    oninput: on_scrub,
                                }
                            },
                            Scrubber::Disabled => rsx! {
                                div { class: "player-slider-empty" }
                            },
                        }}
                    }
                    span { "{view.total_label}" }
                }

                if let Some(source) = view.audio.clone() {
                    audio {
                        id: PLAYER_AUDIO_ID,
                        src: "{source.url}",
                        r#loop: source.looping,
                        autoplay: true,
                        onplay: move |_| store.write().set_playing_state(true),
                        onpause: move |_| store.write().set_playing_state(false),
                        onloadedmetadata: on_loaded_metadata,
                        onended: on_ended,
                    }
                }

                div { class: "player-buttons",
                    TransportButton {
                        icon: PlayerIcon::Shuffle,
                        state: buttons.shuffle,
                        onclick: move |_| dispatch(store, progress, Gesture::ToggleShuffle),
                    }
                    TransportButton {
                        icon: PlayerIcon::PlayPrevious,
                        state: buttons.previous,
                        onclick: move |_| dispatch(store, progress, Gesture::Previous),
                    }
                    TransportButton {
                        icon: view.play_icon,
                        state: buttons.play,
                        class: "play".to_string(),
                        onclick: move |_| dispatch(store, progress, Gesture::PlayPause),
                    }
                    TransportButton {
                        icon: PlayerIcon::PlayNext,
                        state: buttons.next,
                        onclick: move |_| dispatch(store, progress, Gesture::Next),
                    }
                    TransportButton {
                        icon: PlayerIcon::Repeat,
                        state: buttons.repeat,
                        onclick: move |_| dispatch(store, progress, Gesture::ToggleLoop),
                    }
                }
            }
        }
    }
}
