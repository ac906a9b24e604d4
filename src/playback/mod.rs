//! Playback state ownership and the bridge to the platform media element.

#[cfg(not(target_arch = "wasm32"))]
mod eval_media;
pub mod media;
mod store;
#[cfg(target_arch = "wasm32")]
mod web_media;

pub use media::{mounted_media, MediaElement, MediaEvent, Subscription, PLAYER_AUDIO_ID};
pub use store::{PlaybackProvider, PlaybackState, PlayerStore};

#[cfg(test)]
pub(crate) use store::episode;
