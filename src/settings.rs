use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid settings in {}: {source}", .path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub view: ViewSettings,
}

/// Defaults for the terminal view. Command line flags take precedence.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ViewSettings {
    pub time_step: Option<f32>,    // Seconds per generation
    pub draw_char: Option<char>,
    pub color_scheme: Option<u8>,  // 0-9, see colors::scheme_color
    pub show_border: Option<bool>, // Draw tracked dead cells
    pub clip: Option<bool>,        // Drop cells that leave the viewport
}

impl Settings {
    /// Load the user's settings, falling back to defaults when the file is
    /// missing or broken.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            debug!(path = %path.display(), "no settings file");
            return Self::default();
        }

        match Self::read(&path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(%err, "ignoring settings file");
                Self::default()
            }
        }
    }

    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sparselife")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn view_section_parses() {
        let settings: Settings = toml::from_str(
            "[view]\ntime_step = 0.1\ndraw_char = \"@\"\ncolor_scheme = 3\nclip = true\n",
        )
        .unwrap();
        assert_eq!(settings.view.time_step, Some(0.1));
        assert_eq!(settings.view.draw_char, Some('@'));
        assert_eq!(settings.view.color_scheme, Some(3));
        assert_eq!(settings.view.clip, Some(true));
        assert_eq!(settings.view.show_border, None);
    }

    #[test]
    fn read_reports_missing_file() {
        let err = Settings::read(Path::new("/nonexistent/sparselife/config.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn read_reports_bad_toml() {
        let path = std::env::temp_dir().join(format!("sparselife-settings-{}.toml", std::process::id()));
        fs::write(&path, "[view]\ntime_step = \"fast\"\n").unwrap();
        let err = Settings::read(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn config_path_ends_in_app_dir() {
        assert!(Settings::config_path().ends_with("sparselife/config.toml"));
    }
}
