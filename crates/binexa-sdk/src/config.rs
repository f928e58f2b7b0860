use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use binexa_export::ExportOptions;

use crate::error::{SdkError, SdkResult};

/// Name of the config file looked up inside the data directory.
pub const CONFIG_FILE_NAME: &str = "binexa.toml";

/// Platform data directory for Binexa, or `.binexa` when there is none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("binexa"))
        .unwrap_or_else(|| PathBuf::from(".binexa"))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinexaConfig {
    pub data_dir: PathBuf,
    /// Offset from UTC, in minutes, used when rendering timestamps.
    pub utc_offset_minutes: i32,
    pub history_limit: usize,
    pub analytics: bool,
}

impl Default for BinexaConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            utc_offset_minutes: 0,
            history_limit: 20,
            analytics: true,
        }
    }
}

impl BinexaConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str, path: &Path) -> SdkResult<Self> {
        toml::from_str(text).map_err(|source| SdkError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path`, or return the defaults if it does not exist.
    pub fn load(path: &Path) -> SdkResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(SdkError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Resolve the config for a run.
    ///
    /// The config file is read from `data_dir_override` when given, otherwise
    /// from the default data directory. An override always wins over the
    /// file's own `data_dir`; without a file, data lives next to the config.
    pub fn discover(data_dir_override: Option<&Path>) -> SdkResult<Self> {
        let dir = data_dir_override
            .map(Path::to_path_buf)
            .unwrap_or_else(default_data_dir);
        let path = dir.join(CONFIG_FILE_NAME);
        let file_exists = path.exists();

        let mut config = Self::load(&path)?;
        if data_dir_override.is_some() || !file_exists {
            config.data_dir = dir;
        }
        Ok(config)
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::with_utc_offset_minutes(self.utc_offset_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = BinexaConfig::default();
        assert_eq!(c.utc_offset_minutes, 0);
        assert_eq!(c.history_limit, 20);
        assert!(c.analytics);
        assert!(c.data_dir.ends_with("binexa") || c.data_dir.ends_with(".binexa"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = BinexaConfig::from_toml("history_limit = 5\nanalytics = false\n", Path::new("x"))
            .unwrap();
        assert_eq!(c.history_limit, 5);
        assert!(!c.analytics);
        assert_eq!(c.utc_offset_minutes, 0);
    }

    #[test]
    fn invalid_toml_is_reported() {
        let err = BinexaConfig::from_toml("history_limit = \"many\"", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, SdkError::ConfigParse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let c = BinexaConfig::load(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(c.history_limit, 20);
    }

    #[test]
    fn discover_uses_override_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "data_dir = \"/elsewhere\"\nutc_offset_minutes = 120\n",
        )
        .unwrap();
        let c = BinexaConfig::discover(Some(dir.path())).unwrap();
        assert_eq!(c.data_dir, dir.path());
        assert_eq!(c.utc_offset_minutes, 120);
        assert_eq!(c.export_options().utc_offset_minutes, 120);
    }

    #[test]
    fn discover_without_file_stores_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let c = BinexaConfig::discover(Some(dir.path())).unwrap();
        assert_eq!(c.data_dir, dir.path());
        assert!(c.analytics);
    }
}
