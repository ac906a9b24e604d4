use crate::models::Episode;
use dioxus::logger::tracing::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Read-only snapshot of the player, as seen by the panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: Option<usize>,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PlaybackState {
    pub fn current_episode(&self) -> Option<&Episode> {
        self.current_episode_index
            .and_then(|index| self.episode_list.get(index))
    }
}

/// Owner of the canonical playback state. The panel only reads snapshots and
/// requests changes through these operations.
pub trait PlaybackProvider {
    fn snapshot(&self) -> PlaybackState;
    fn toggle_play(&mut self);
    fn toggle_loop(&mut self);
    fn toggle_shuffle(&mut self);
    fn play_next(&mut self);
    fn play_previous(&mut self);
    fn set_playing_state(&mut self, playing: bool);
    fn clear_player_state(&mut self);
}

#[derive(Debug, Clone)]
pub struct PlayerStore {
    episode_list: Vec<Episode>,
    current_episode_index: Option<usize>,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
    rng: StdRng,
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl PlayerStore {
    /// Store with a fixed shuffle seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            episode_list: Vec::new(),
            current_episode_index: None,
            is_playing: false,
            is_looping: false,
            is_shuffling: false,
            rng,
        }
    }

    pub fn play(&mut self, episode: Episode) {
        self.play_list(vec![episode], 0);
    }

    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        self.current_episode_index = (index < list.len()).then_some(index);
        self.episode_list = list;
        self.is_playing = self.current_episode_index.is_some();
        debug!(
            episodes = self.episode_list.len(),
            index = ?self.current_episode_index,
            "episode list replaced"
        );
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.current_episode_index
            .and_then(|index| self.episode_list.get(index))
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn has_next(&self) -> bool {
        match self.current_episode_index {
            Some(index) => self.is_shuffling || index + 1 < self.episode_list.len(),
            None => false,
        }
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.current_episode_index, Some(index) if index > 0)
    }

    fn select(&mut self, index: usize) {
        debug!(from = ?self.current_episode_index, to = index, "episode selected");
        self.current_episode_index = Some(index);
    }
}

impl PlaybackProvider for PlayerStore {
    fn snapshot(&self) -> PlaybackState {
        PlaybackState {
            episode_list: self.episode_list.clone(),
            current_episode_index: self.current_episode_index,
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    fn play_next(&mut self) {
        if !self.has_next() {
            return;
        }
        let next = if self.is_shuffling {
            self.rng.gen_range(0..self.episode_list.len())
        } else {
            self.current_episode_index.map_or(0, |index| index + 1)
        };
        self.select(next);
    }

    fn play_previous(&mut self) {
        if let Some(index) = self.current_episode_index.filter(|index| *index > 0) {
            self.select(index - 1);
        }
    }

    fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    fn clear_player_state(&mut self) {
        debug!("player state cleared");
        self.episode_list.clear();
        self.current_episode_index = None;
        self.is_playing = false;
    }
}

#[cfg(test)]
pub(crate) fn episode(title: &str, duration: u32) -> Episode {
    Episode {
        id: title.to_lowercase(),
        title: title.to_string(),
        members: "Diego e Richard".to_string(),
        thumbnail: format!("https://cdn.test/{title}.jpg"),
        url: format!("https://cdn.test/{title}.mp3"),
        duration,
    }
}
