//! Configuration management
//!
//! Compatible with the desktop settings.json format:
//! ```json
//! {
//!   "app": { "demoMode": false, ... }
//! }
//! ```
//! Demo mode serves the seeded in-memory fleet instead of the document
//! collection on disk.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Staroil configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub demo_mode: bool,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Config {
    /// Load config from the staroil directory
    ///
    /// Demo mode can be enabled via:
    /// 1. Settings file (staroil demo on)
    /// 2. Environment variable STAROIL_DEMO_MODE (for CI/testing)
    pub fn load(staroil_dir: &Path) -> Result<Self> {
        let settings_path = staroil_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let demo_mode = match std::env::var("STAROIL_DEMO_MODE").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.demo_mode,
        };

        Ok(Self {
            demo_mode,
            _raw_settings: raw,
        })
    }

    /// Save config to the staroil directory
    /// Preserves settings that this crate doesn't manage
    pub fn save(&self, staroil_dir: &Path) -> Result<()> {
        let settings_path = staroil_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.demo_mode = self.demo_mode;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Enable demo mode
    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    /// Disable demo mode
    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }
}
