use super::error::PipelineError;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

const CONFIG_FILE_NAME: &str = "configuration.json";
const DEFAULT_UPDATE_INTERVAL_MINUTES: u32 = 5;

/// Run configuration. Every key is optional; each stage checks the keys it needs.
#[derive(Default, Deserialize, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    pub api_url: Option<String>,
    pub api_header_key_title: Option<String>,
    pub api_key: Option<String>,
    pub currency_filter: Option<Vec<String>>,
    pub capsule_header_location: Option<String>,
    pub capsule_footer_location: Option<String>,
    pub output_location: Option<String>,
    pub update_interval_minutes: Option<u32>,
}

// Prints the API key as `***`.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_url", &self.api_url)
            .field("api_header_key_title", &self.api_header_key_title)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("currency_filter", &self.currency_filter)
            .field("capsule_header_location", &self.capsule_header_location)
            .field("capsule_footer_location", &self.capsule_footer_location)
            .field("output_location", &self.output_location)
            .field("update_interval_minutes", &self.update_interval_minutes)
            .finish()
    }
}

impl AppConfig {
    /// Loads `./configuration.json` when present, else the file in the user config directory.
    pub fn load() -> Result<Self> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            debug!("Loading config from working directory");
            return Self::load_from_path(&local);
        }

        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "cryptogauge", "cryptogauge")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Reads a config file. `.yaml`/`.yml` files are parsed as YAML, anything else as JSON.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let config: Self = if is_yaml {
            serde_yaml::from_str(&config_str)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            serde_json::from_str(&config_str)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        };
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Returns the value of a string key, or `MissingConfig` naming the kebab-case key.
    pub fn require<'a>(
        value: &'a Option<String>,
        key: &'static str,
    ) -> Result<&'a str, PipelineError> {
        value.as_deref().ok_or(PipelineError::MissingConfig(key))
    }

    pub fn currency_filter(&self) -> Result<&[String], PipelineError> {
        self.currency_filter
            .as_deref()
            .ok_or(PipelineError::MissingConfig("currency-filter"))
    }

    pub fn update_interval_minutes(&self) -> u32 {
        self.update_interval_minutes
            .unwrap_or(DEFAULT_UPDATE_INTERVAL_MINUTES)
    }
}
