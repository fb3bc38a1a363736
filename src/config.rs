//! User settings, persisted as JSON in the OS config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors raised while reading or writing the settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("settings I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Dashboard preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix for budget amounts.
    pub currency_symbol: String,
    /// Percentage points moved by the progress up/down buttons.
    pub progress_step: i64,
    /// Start with the demonstration projects instead of an empty table.
    pub seed_sample_projects: bool,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".into(),
            progress_step: 10,
            seed_sample_projects: true,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    /// Location of `settings.json`, falling back to the working directory
    /// when the platform has no config dir.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "ProjectDashboard")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("settings.json"))
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let mut settings: Settings =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.progress_step = settings.progress_step.clamp(1, 100);
        Ok(settings)
    }

    /// Write settings to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(io_err)
    }

    /// Load settings, writing the defaults on first run.
    ///
    /// Always yields usable settings: on failure the defaults come back
    /// together with the error, so the caller can report it once logging
    /// is up.
    pub fn load_or_init(path: &Path) -> (Self, Option<ConfigError>) {
        if !path.exists() {
            let settings = Self::default();
            let err = settings.save_to(path).err();
            return (settings, err);
        }
        match Self::load_from(path) {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "currency_symbol": "$", "progress_step": 500 }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(
            settings,
            Settings {
                currency_symbol: "$".into(),
                progress_step: 100,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn load_or_init_falls_back_and_hands_back_the_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let (settings, err) = Settings::load_or_init(&path);
        assert_eq!(settings, Settings::default());
        assert!(matches!(err, Some(ConfigError::Parse { .. })));
        // The broken file is left alone for the user to fix.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn load_or_init_reads_existing_file_once_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "log_filter": "debug" }"#).unwrap();

        let (settings, err) = Settings::load_or_init(&path);
        assert!(err.is_none());
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let (settings, err) = Settings::load_or_init(&path);
        assert_eq!(settings, Settings::default());
        assert!(err.is_none());
        assert!(path.exists());

        let custom = Settings {
            seed_sample_projects: false,
            ..Settings::default()
        };
        custom.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), custom);
    }
}
