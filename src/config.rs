use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use famcal_core::Color;
use famcal_core::picker::wheel::DEFAULT_MINUTES_STEP;
use serde::Deserialize;

static DEFAULT_API_URL: &str = "http://localhost:8080";
static DEFAULT_SESSION_PATH: &str = "~/.config/famcal/session.json";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_session_path() -> PathBuf {
    PathBuf::from(DEFAULT_SESSION_PATH)
}

fn default_minutes_step() -> u32 {
    DEFAULT_MINUTES_STEP
}

/// Global configuration at ~/.config/famcal/config.toml
///
/// Every key can be overridden from the environment with a `FAMCAL_` prefix,
/// e.g. `FAMCAL_API_URL`.
#[derive(Debug, Deserialize, Clone)]
pub struct FamcalConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_session_path")]
    pub session_path: PathBuf,

    #[serde(default = "default_minutes_step")]
    pub minutes_step: u32,

    #[serde(default)]
    pub default_color: Color,

    pub user_id: Option<String>,
}

impl FamcalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("famcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented-out default on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config: FamcalConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("FAMCAL").try_parsing(true))
            .build()
            .with_context(|| format!("Could not read config file {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("Invalid config in {}", path.display()))?;

        tracing::debug!(api_url = %config.api_url, "loaded config");
        Ok(config)
    }

    /// Session file path with `~` expanded.
    pub fn session_file(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.session_path.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# famcal configuration

# Auth service base URL:
# api_url = \"{}\"

# Where the login token is kept:
# session_path = \"{}\"

# Minute step of the time picker (must divide 60):
# minutes_step = {}

# Color for new events:
# default_color = \"{}\"

# Your user id, used as the author of new events:
# user_id = \"userA\"
",
            DEFAULT_API_URL,
            DEFAULT_SESSION_PATH,
            DEFAULT_MINUTES_STEP,
            famcal_core::event::DEFAULT_COLOR,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, contents).context("Could not write config file")?;

        Ok(())
    }
}
