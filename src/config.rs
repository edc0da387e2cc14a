use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".classminrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_html")]
    pub html: String,
    #[serde(default = "default_css")]
    pub css: Vec<String>,
}

fn default_html() -> String {
    "index.html".to_string()
}

fn default_css() -> Vec<String> {
    vec!["css/*.css".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            html: default_html(),
            css: default_css(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `css` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.css {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'css': \"{}\"", pattern))?;
        }
        Ok(())
    }

    /// Load the config file at `path`, or fall back to defaults if it does
    /// not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;

        Ok(config)
    }
}

/// Default config serialized with 2-space indentation, used by `init`.
pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    Ok(json + "\n")
}
