use dioxus::prelude::*;

const SHUFFLE: Asset = asset!("/assets/shuffle.svg");
const PLAY_PREVIOUS: Asset = asset!("/assets/play-previous.svg");
const PLAY: Asset = asset!("/assets/play.svg");
const PAUSE: Asset = asset!("/assets/pause.svg");
const PLAY_NEXT: Asset = asset!("/assets/play-next.svg");
const REPEAT: Asset = asset!("/assets/repeat.svg");
const PLAYING: Asset = asset!("/assets/playing.svg");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerIcon {
    Shuffle,
    PlayPrevious,
    Play,
    Pause,
    PlayNext,
    Repeat,
    Playing,
}

impl PlayerIcon {
    pub fn asset(self) -> Asset {
        match self {
            PlayerIcon::Shuffle => SHUFFLE,
            PlayerIcon::PlayPrevious => PLAY_PREVIOUS,
            PlayerIcon::Play => PLAY,
            PlayerIcon::Pause => PAUSE,
            PlayerIcon::PlayNext => PLAY_NEXT,
            PlayerIcon::Repeat => REPEAT,
            PlayerIcon::Playing => PLAYING,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerIcon::Shuffle => "Shuffle",
            PlayerIcon::PlayPrevious => "Play previous",
            PlayerIcon::Play => "Play",
            PlayerIcon::Pause => "Pause",
            PlayerIcon::PlayNext => "Play next",
            PlayerIcon::Repeat => "Repeat",
            PlayerIcon::Playing => "Now playing",
        }
    }
}

#[component]
pub fn Icon(icon: PlayerIcon) -> Element {
    rsx! {
        img { src: icon.asset(), alt: icon.label() }
    }
}
