use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL (default: the hosted BlockFile instance)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Where downloaded product files are written
    #[serde(default)]
    pub downloads_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://blockfile.up.railway.app".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            downloads_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from file, environment, and CLI arguments
    pub fn load(
        config_path: Option<&PathBuf>,
        cli_base_url: Option<&str>,
        cli_downloads_dir: Option<&PathBuf>,
    ) -> anyhow::Result<Self> {
        // Start with default config
        let mut config = if let Some(path) = config_path {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            // Try default config file
            if let Ok(content) = std::fs::read_to_string("blockfile.toml") {
                toml::from_str(&content)?
            } else {
                Config::default()
            }
        };

        // Override with environment variables
        if let Ok(base_url) = std::env::var("BLOCKFILE_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(dir) = std::env::var("BLOCKFILE_DOWNLOADS_DIR") {
            config.downloads_dir = Some(PathBuf::from(dir));
        }

        // Override with CLI arguments
        if let Some(base_url) = cli_base_url {
            config.base_url = base_url.to_string();
        }
        if let Some(dir) = cli_downloads_dir {
            config.downloads_dir = Some(dir.clone());
        }

        Ok(config)
    }

    /// Resolves the downloads directory: explicit setting, then the
    /// platform downloads folder, then local app data, then the temp dir.
    pub fn downloads_dir(&self) -> PathBuf {
        if let Some(dir) = &self.downloads_dir {
            return dir.clone();
        }
        if let Some(dir) = dirs::download_dir() {
            return dir;
        }
        if let Some(dir) = dirs::data_local_dir() {
            return dir.join("blockfile").join("downloads");
        }
        std::env::temp_dir()
    }
}
