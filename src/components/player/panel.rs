//! Render model and event handling for the player panel, kept free of Dioxus so
//! the state transitions can be exercised directly.

use crate::components::PlayerIcon;
use crate::models::{convert_duration_to_time_string, Episode};
use crate::playback::{MediaElement, MediaEvent, PlaybackProvider, PlaybackState, Subscription};
use dioxus::logger::tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub enabled: bool,
    pub active: bool,
}

impl ButtonState {
    fn enabled_if(enabled: bool) -> Self {
        Self {
            enabled,
            active: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub shuffle: ButtonState,
    pub previous: ButtonState,
    pub play: ButtonState,
    pub next: ButtonState,
    pub repeat: ButtonState,
}

impl Controls {
    pub fn for_state(state: &PlaybackState) -> Self {
        let selected = state.current_episode().is_some();
        Self {
            shuffle: ButtonState {
                enabled: selected && state.episode_list.len() > 1,
                active: state.is_shuffling,
            },
            previous: ButtonState::enabled_if(selected && state.has_previous),
            play: ButtonState::enabled_if(selected),
            next: ButtonState::enabled_if(selected && state.has_next),
            repeat: ButtonState {
                enabled: selected,
                active: state.is_looping,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scrubber {
    Disabled,
    Live { max: u32, value: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioSource {
    pub url: String,
    pub looping: bool,
}

/// Everything the panel draws for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub episode: Option<Episode>,
    pub elapsed_label: String,
    pub total_label: String,
    pub scrubber: Scrubber,
    pub controls: Controls,
    pub play_icon: PlayerIcon,
    pub audio: Option<AudioSource>,
}

impl PanelView {
    pub fn new(state: &PlaybackState, progress: u32) -> Self {
        let episode = state.current_episode().cloned();
        let (elapsed, total, scrubber) = match &episode {
            // Only the slider is clamped; the label follows the media clock.
            Some(episode) => (
                progress,
                episode.duration,
                Scrubber::Live {
                    max: episode.duration,
                    value: progress.min(episode.duration),
                },
            ),
            None => (0, 0, Scrubber::Disabled),
        };
        let audio = episode.as_ref().map(|episode| AudioSource {
            url: episode.url.clone(),
            looping: state.is_looping,
        });

        Self {
            elapsed_label: convert_duration_to_time_string(elapsed),
            total_label: convert_duration_to_time_string(total),
            scrubber,
            controls: Controls::for_state(state),
            play_icon: if state.is_playing {
                PlayerIcon::Pause
            } else {
                PlayerIcon::Play
            },
            audio,
            episode,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.episode.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Scrub(u32),
    ToggleShuffle,
    Previous,
    PlayPause,
    Next,
    ToggleLoop,
}

impl Gesture {
    /// Runs the gesture if its control is enabled. Returns the new progress
    /// value when the gesture moved the playhead.
    pub fn apply<P, M>(self, provider: &mut P, media: Option<&mut M>) -> Option<u32>
    where
        P: PlaybackProvider + ?Sized,
        M: MediaElement + ?Sized,
    {
        let state = provider.snapshot();
        let controls = Controls::for_state(&state);
        match self {
            Gesture::Scrub(seconds) => {
                let episode = state.current_episode()?;
                let seconds = seconds.min(episode.duration);
                if let Some(media) = media {
                    media.set_current_time(f64::from(seconds));
                }
                return Some(seconds);
            }
            Gesture::ToggleShuffle if controls.shuffle.enabled => provider.toggle_shuffle(),
            Gesture::Previous if controls.previous.enabled => provider.play_previous(),
            Gesture::PlayPause if controls.play.enabled => provider.toggle_play(),
            Gesture::Next if controls.next.enabled => provider.play_next(),
            Gesture::ToggleLoop if controls.repeat.enabled => provider.toggle_loop(),
            ignored => debug!(gesture = ?ignored, "control disabled, gesture ignored"),
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaTransition {
    Play,
    Pause,
}

/// Drives the media element from the `is_playing` flag, acting only when the
/// flag changes.
#[derive(Debug, Default)]
pub struct PlaybackSync {
    observed: Option<bool>,
}

impl PlaybackSync {
    pub fn observe<M>(&mut self, is_playing: bool, media: Option<&mut M>) -> Option<MediaTransition>
    where
        M: MediaElement + ?Sized,
    {
        if self.observed == Some(is_playing) {
            return None;
        }
        self.observed = Some(is_playing);

        let media = media?;
        if is_playing {
            media.play();
            Some(MediaTransition::Play)
        } else {
            media.pause();
            Some(MediaTransition::Pause)
        }
    }
}

pub fn progress_from_time(seconds: f64) -> u32 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u32
    } else {
        0
    }
}

/// Rewinds a freshly loaded episode and follows its playhead. The returned
/// guard keeps the time-update listener alive.
pub fn track_progress<M>(media: &mut M, mut on_progress: impl FnMut(u32) + 'static) -> Subscription
where
    M: MediaElement + ?Sized,
{
    media.set_current_time(0.0);
    on_progress(0);
    media.subscribe(
        MediaEvent::TimeUpdate,
        Box::new(move |seconds| on_progress(progress_from_time(seconds))),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOfTrack {
    Advanced,
    Cleared,
}

pub fn finish_episode<P>(provider: &mut P) -> EndOfTrack
where
    P: PlaybackProvider + ?Sized,
{
    if provider.snapshot().has_next {
        provider.play_next();
        debug!("episode ended, advancing");
        EndOfTrack::Advanced
    } else {
        provider.clear_player_state();
        debug!("episode ended at end of queue, clearing player");
        EndOfTrack::Cleared
    }
}
