use crate::models::Episode;
use crate::theme::ThemeName;
use dioxus::logger::tracing::{error, info};
use serde::{Deserialize, Serialize};

const BUNDLED_CONFIG: &str = include_str!("../assets/podcastr.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse app config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("episode {index} ({title:?}) has no audio url")]
    MissingAudio { index: usize, title: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub theme: ThemeName,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

fn default_title() -> String {
    "Podcastr".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            theme: ThemeName::default(),
            episodes: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        if let Some((index, episode)) = config
            .episodes
            .iter()
            .enumerate()
            .find(|(_, episode)| episode.url.trim().is_empty())
        {
            return Err(ConfigError::MissingAudio {
                index,
                title: episode.title.clone(),
            });
        }
        Ok(config)
    }

    /// Loads the bundled config, falling back to an empty feed on error.
    pub fn load() -> Self {
        match Self::parse(BUNDLED_CONFIG) {
            Ok(config) => {
                info!(episodes = config.episodes.len(), theme = ?config.theme, "config loaded");
                config
            }
            Err(err) => {
                error!(%err, "bundled config rejected, starting with an empty feed");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = AppConfig::parse(BUNDLED_CONFIG).unwrap();
        assert!(!config.episodes.is_empty());
        assert_eq!(config.theme, ThemeName::Light);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = AppConfig::parse("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn rejects_episode_without_audio() {
        let raw = r#"{"episodes":[{"title":"Broken","url":"  "}]}"#;
        match AppConfig::parse(raw) {
            Err(ConfigError::MissingAudio { index, title }) => {
                assert_eq!(index, 0);
                assert_eq!(title, "Broken");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_theme() {
        let err = AppConfig::parse(r#"{"theme":"neon"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
