use crate::components::Player;
use crate::config::AppConfig;
use crate::models::{convert_duration_to_time_string, Episode};
use crate::playback::PlayerStore;
use crate::theme::Theme;
use dioxus::prelude::*;

/// Page layout: the episode list on the left, the player panel on the right.
#[component]
pub fn AppShell(config: AppConfig, theme: Theme) -> Element {
    let store = use_signal(PlayerStore::default);
    let episodes = config.episodes.clone();

    rsx! {
        div { class: "app-shell",
            style: "display: flex;",
            main { style: "flex: 1; padding: 2rem 4rem; height: 100vh; overflow-y: auto;",
                header { style: "margin-bottom: 2rem;",
                    h1 { style: "color: {theme.gray800}; font-family: {theme.fonts.lexend}, sans-serif;",
                        "{config.title}"
                    }
                }
                if episodes.is_empty() {
                    p { "No episodes yet." }
                } else {
                    h2 { style: "color: {theme.gray800}; margin-bottom: 1.5rem;", "All episodes" }
                    ul { style: "list-style: none; display: flex; flex-direction: column; gap: 1rem;",
                        for (index, episode) in episodes.iter().enumerate() {
                            EpisodeRow {
                                key: "{episode.id}-{index}",
                                episode: episode.clone(),
                                theme,
                                onplay: {
                                    let episodes = episodes.clone();
                                    let mut store = store;
                                    move |_| store.write().play_list(episodes.clone(), index)
                                },
                            }
                        }
                    }
                }
            }
            Player { store, theme }
        }
    }
}

#[component]
fn EpisodeRow(episode: Episode, theme: Theme, onplay: EventHandler<MouseEvent>) -> Element {
    let duration = convert_duration_to_time_string(episode.duration);

    rsx! {
        li { style: "display: flex; align-items: center; gap: 1.5rem; padding: 1.25rem; background: {theme.white}; border: 1px solid {theme.gray100}; border-radius: 1.5rem;",
            img {
                src: "{episode.thumbnail}",
                alt: "{episode.title}",
                style: "width: 6rem; height: 6rem; object-fit: cover; border-radius: 1rem;",
            }
            div { style: "flex: 1; min-width: 0;",
                strong { style: "display: block; color: {theme.gray800}; font-family: {theme.fonts.lexend}, sans-serif;",
                    "{episode.title}"
                }
                p { style: "font-size: 0.875rem; margin-top: 0.5rem;", "{episode.members}" }
                span { style: "font-size: 0.875rem;", "{duration}" }
            }
            button {
                r#type: "button",
                style: "width: 2.5rem; height: 2.5rem; border: 1px solid {theme.gray100}; border-radius: 0.675rem; background: {theme.white}; color: {theme.green500}; font-weight: 600;",
                aria_label: "Play {episode.title}",
                onclick: move |evt| onplay.call(evt),
                "▶"
            }
        }
    }
}
