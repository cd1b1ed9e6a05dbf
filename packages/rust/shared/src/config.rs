//! Application configuration for FilterForge.
//!
//! User config lives at `~/.filterforge/filterforge.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FilterForgeError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "filterforge.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".filterforge";

// ---------------------------------------------------------------------------
// Config structs (matching filterforge.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream source locations.
    #[serde(default)]
    pub sources: SourcesConfig,

    /// HTTP fetch behavior.
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// `[sources]` section — where the base file and fragment files live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// URL of the base config template.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// URL of the directory holding the `.bh` fragment files.
    #[serde(default = "default_blocks_base_url")]
    pub blocks_base_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            blocks_base_url: default_blocks_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://raw.githubusercontent.com/DoctorWoot420/cosmic-resurgence-bh/main/BH.cfg".into()
}
fn default_blocks_base_url() -> String {
    "https://raw.githubusercontent.com/DoctorWoot420/cosmic-resurgence-bh/main/filter-blocks"
        .into()
}

/// `[fetch]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    concat!("FilterForge/", env!("CARGO_PKG_VERSION")).into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.filterforge/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| FilterForgeError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.filterforge/filterforge.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| FilterForgeError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        FilterForgeError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| FilterForgeError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| FilterForgeError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| FilterForgeError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
