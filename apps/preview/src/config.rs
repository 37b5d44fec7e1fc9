use std::{fs, path::Path, time::Duration};

use projection::{AUTO_ADVANCE_INTERVAL, FALLBACK_LANGUAGE};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_url: Option<String>,
    pub data_dir: String,
    pub default_lang: String,
    pub carousel_slides: usize,
    pub carousel_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_url: None,
            data_dir: ".".into(),
            default_lang: FALLBACK_LANGUAGE.into(),
            carousel_slides: 0,
            carousel_interval_ms: AUTO_ADVANCE_INTERVAL.as_millis() as u64,
        }
    }
}

impl Settings {
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    data_url: Option<String>,
    data_dir: Option<String>,
    default_lang: Option<String>,
    carousel_slides: Option<usize>,
    carousel_interval_ms: Option<u64>,
}

/// Defaults, then `path` if it exists, then environment variables.
pub fn load_settings(path: &Path) -> Settings {
    let raw = fs::read_to_string(path).ok();
    settings_from(raw.as_deref(), |key| std::env::var(key).ok())
}

pub(crate) fn settings_from(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.data_url {
                    settings.data_url = Some(v);
                }
                if let Some(v) = file_cfg.data_dir {
                    settings.data_dir = v;
                }
                if let Some(v) = file_cfg.default_lang {
                    settings.default_lang = v;
                }
                if let Some(v) = file_cfg.carousel_slides {
                    settings.carousel_slides = v;
                }
                if let Some(v) = file_cfg.carousel_interval_ms {
                    settings.carousel_interval_ms = v;
                }
            }
            Err(error) => warn!(%error, "ignoring unreadable settings file"),
        }
    }

    if let Some(v) = env("SITE_DATA_URL") {
        settings.data_url = Some(v);
    }
    if let Some(v) = env("APP__DATA_URL") {
        settings.data_url = Some(v);
    }

    if let Some(v) = env("APP__DATA_DIR") {
        settings.data_dir = v;
    }

    if let Some(v) = env("APP__DEFAULT_LANG") {
        settings.default_lang = v;
    }

    if let Some(v) = env("APP__CAROUSEL_SLIDES") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.carousel_slides = parsed;
        }
    }

    if let Some(v) = env("APP__CAROUSEL_INTERVAL_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.carousel_interval_ms = parsed;
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
