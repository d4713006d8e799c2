use crate::error::{ClipError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Environment variable that overrides the clip directory.
pub const HOME_ENV: &str = "PROCLIP_HOME";

/// Where clips live. Resolved once by the client and passed down explicitly.
#[derive(Debug, Clone)]
pub struct ClipPaths {
    pub clips: PathBuf,
}

impl ClipPaths {
    pub fn new(clips: impl Into<PathBuf>) -> Self {
        Self {
            clips: clips.into(),
        }
    }

    /// `$PROCLIP_HOME` if set, otherwise the platform data directory.
    pub fn from_env() -> Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(home));
        }
        let dirs = ProjectDirs::from("com", "proclip", "proclip")
            .ok_or_else(|| ClipError::Api("Could not determine a data directory".to_string()))?;
        Ok(Self::new(dirs.data_dir()))
    }

    /// Returns the clip directory, creating it if needed.
    pub fn ensure_clips_dir(&self) -> Result<&Path> {
        if !self.clips.exists() {
            fs::create_dir_all(&self.clips)?;
            tracing::info!(path = %self.clips.display(), "created clip directory");
        }
        Ok(&self.clips)
    }
}

/// Configuration for proclip, stored in `<clip dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProclipConfig {
    /// Overwrite existing files when pasting, without `--overwrite`
    #[serde(default)]
    pub overwrite: bool,

    /// Directory pasted files go to when no output is given (defaults to the cwd)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl ProclipConfig {
    pub const KEYS: &'static [&'static str] = &["overwrite", "output-dir"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "overwrite" => Some(self.overwrite.to_string()),
            "output-dir" => Some(
                self.output_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "overwrite" => {
                self.overwrite = match value.to_lowercase().as_str() {
                    "true" | "yes" | "1" | "on" => true,
                    "false" | "no" | "0" | "off" => false,
                    _ => return Err(format!("Invalid value for overwrite: {}", value)),
                };
                Ok(())
            }
            "output-dir" => {
                self.output_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
