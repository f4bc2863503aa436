use crate::locale::Locale;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory name used under the platform config/data dirs
pub const APP_DIR: &str = "height-rank";

/// Failures while reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write config file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application configuration for export/import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Version field for future compatibility
    pub version: u32,
    /// Theme at startup
    pub theme: Theme,
    pub locale: Locale,
    /// Virtual pixels spanned by one terminal column
    pub cell_width_px: u16,
    /// Virtual pixels spanned by one terminal row
    pub cell_height_px: u16,
    /// Delay between animation frames
    pub frame_interval_ms: u64,
    /// Where log files go (None = platform default)
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Export config to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Import config from a JSON file, clamping out-of-range values
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config.clamped())
    }

    /// Default config file location, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR).join("config.json"))
    }

    /// Load the default config file when present, else defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Log directory, falling back to the platform data dir and then `./logs`
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|p| p.join(APP_DIR).join("logs")))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }

    /// Keep numeric settings within usable ranges
    pub fn clamped(mut self) -> Self {
        self.cell_width_px = self.cell_width_px.clamp(1, 64);
        self.cell_height_px = self.cell_height_px.clamp(1, 64);
        self.frame_interval_ms = self.frame_interval_ms.clamp(5, 1000);
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            theme: Theme::Light,
            locale: Locale::En,
            cell_width_px: 8,
            cell_height_px: 16,
            frame_interval_ms: 16,
            log_dir: None,
        }
    }
}
