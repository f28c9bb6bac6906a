use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::options::{Audience, MessageType, Tone};
use crate::domain::request::DraftInput;
use crate::error::{AppError, AppResult};

const APP_DIR_NAME: &str = "supportdraft";
const CONFIG_FILE_NAME: &str = "config.json";
const HOME_ENV: &str = "SUPPORTDRAFT_HOME";
const AUTHOR_ENV: &str = "SUPPORTDRAFT_AUTHOR";
const DEFAULT_CLIPBOARD_HOLD_SECS: u64 = 30;

/// Defaults persisted by `config init`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredConfig {
    pub default_author: Option<String>,
    pub default_tone: Option<String>,
    pub default_audience: Option<String>,
    pub default_message_type: Option<String>,
    /// Seconds to keep serving the clipboard on Linux; 0 disables the wait.
    pub clipboard_hold_secs: Option<u64>,
}

impl StoredConfig {
    pub fn load() -> AppResult<Self> {
        Self::load_from(&config_file_path()?)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str::<StoredConfig>(&contents)
                .map_err(|err| AppError::Configuration(format!("invalid config file: {err}"))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(StoredConfig::default()),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)
            .map_err(|err| AppError::Configuration(format!("failed to write config: {err}")))?;
        fs::write(path, data)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_author: Option<String>,
    pub default_tone: Tone,
    pub default_audience: Audience,
    pub default_message_type: MessageType,
    pub clipboard_hold: Duration,
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        let data_dir = config_directory()?;
        let stored = StoredConfig::load_from(&data_dir.join(CONFIG_FILE_NAME))?;
        let author_override = env::var(AUTHOR_ENV).ok();
        Ok(Self::from_stored(stored, author_override, data_dir))
    }

    pub fn from_stored(
        stored: StoredConfig,
        author_override: Option<String>,
        data_dir: PathBuf,
    ) -> Self {
        let default_author = author_override
            .or(stored.default_author)
            .map(|author| author.trim().to_string())
            .filter(|author| !author.is_empty());

        let default_tone = stored
            .default_tone
            .as_deref()
            .and_then(Tone::from_str)
            .unwrap_or(Tone::Professional);
        let default_audience = stored
            .default_audience
            .as_deref()
            .map(Audience::parse)
            .unwrap_or(Audience::Customer);
        let default_message_type = stored
            .default_message_type
            .as_deref()
            .and_then(MessageType::from_str)
            .unwrap_or(MessageType::Email);
        let clipboard_hold = Duration::from_secs(
            stored
                .clipboard_hold_secs
                .unwrap_or(DEFAULT_CLIPBOARD_HOLD_SECS),
        );

        debug!(data_dir = %data_dir.display(), "configuration loaded");

        Self {
            default_author,
            default_tone,
            default_audience,
            default_message_type,
            clipboard_hold,
            data_dir,
        }
    }

    /// Blank form state seeded with the configured defaults.
    pub fn base_input(&self) -> DraftInput {
        DraftInput {
            msg_type: self.default_message_type.as_str().to_string(),
            audience: self.default_audience.as_str().to_string(),
            tone: self.default_tone.as_str().to_string(),
            your_name: self.default_author.clone().unwrap_or_default(),
            ..DraftInput::default()
        }
    }
}

pub fn config_directory() -> AppResult<PathBuf> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| {
            AppError::Configuration(format!(
                "cannot locate a config directory; set {HOME_ENV}"
            ))
        })
}

pub fn config_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_author_overrides_stored_author() {
        let stored = StoredConfig {
            default_author: Some("Alex".to_string()),
            ..StoredConfig::default()
        };
        let config =
            AppConfig::from_stored(stored, Some(" Jordan ".to_string()), PathBuf::from("/tmp"));
        assert_eq!(config.default_author.as_deref(), Some("Jordan"));
    }

    #[test]
    fn invalid_defaults_fall_back() {
        let stored = StoredConfig {
            default_author: Some("  ".to_string()),
            default_tone: Some("shouty".to_string()),
            default_message_type: Some("fax".to_string()),
            default_audience: None,
            clipboard_hold_secs: None,
        };
        let config = AppConfig::from_stored(stored, None, PathBuf::from("/tmp"));
        assert_eq!(config.default_author, None);
        assert_eq!(config.default_tone, Tone::Professional);
        assert_eq!(config.default_message_type, MessageType::Email);
        assert_eq!(config.default_audience, Audience::Customer);
        assert_eq!(config.clipboard_hold, Duration::from_secs(30));
    }

    #[test]
    fn clipboard_hold_can_be_disabled() {
        let stored = StoredConfig {
            clipboard_hold_secs: Some(0),
            ..StoredConfig::default()
        };
        let config = AppConfig::from_stored(stored, None, PathBuf::from("/tmp"));
        assert!(config.clipboard_hold.is_zero());
    }

    #[test]
    fn base_input_carries_defaults() {
        let stored = StoredConfig {
            default_author: Some("Alex".to_string()),
            default_tone: Some("friendly".to_string()),
            default_audience: Some("manager".to_string()),
            default_message_type: Some("ticket".to_string()),
            clipboard_hold_secs: None,
        };
        let input = AppConfig::from_stored(stored, None, PathBuf::from("/tmp")).base_input();
        assert_eq!(input.your_name, "Alex");
        assert_eq!(input.tone, "friendly");
        assert_eq!(input.audience, "manager");
        assert_eq!(input.msg_type, "ticket");
        assert_eq!(input.scenario, "password_reset");
    }

    #[test]
    fn stored_config_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        assert_eq!(StoredConfig::load_from(&path).unwrap(), StoredConfig::default());

        let stored = StoredConfig {
            default_author: Some("Alex".to_string()),
            default_tone: Some("firm".to_string()),
            ..StoredConfig::default()
        };
        stored.save_to(&path).unwrap();
        assert_eq!(StoredConfig::load_from(&path).unwrap(), stored);
    }
}
