use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use super::mapper::{settings_from_toml, settings_to_toml};
use crate::models::settings::PageSettings;

const SETTINGS_FILE: &str = "page.toml";

/// Loads and stores page settings in a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory, or the current
    /// directory when none can be resolved.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "WeddingCountdown", "Invitation") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file yields the defaults.
    pub fn load(&self) -> Result<PageSettings> {
        if !self.path.exists() {
            log::info!(
                "No settings at {}, using defaults",
                self.path.display()
            );
            return Ok(PageSettings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings = settings_from_toml(&data)
            .with_context(|| format!("failed to load settings from {}", self.path.display()))?;
        log::debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    pub fn save(&self, settings: &PageSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = settings_to_toml(settings)?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}
