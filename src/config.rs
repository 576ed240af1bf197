use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,
    #[serde(default)]
    pub release: ReleaseConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ChangelogConfig {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ReleaseConfig {
    pub remote: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            changelog: ChangelogConfig {
                path: Some("CHANGELOG.md".to_string()),
            },
            release: ReleaseConfig {
                remote: Some("origin".to_string()),
            },
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();

        if !path.exists() {
            println!("⚠️  Configuration file not found, using default configuration");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {:?}: {}", path, e))?;

        let config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse TOML config {:?}: {}", path, e))?;

        Ok(config)
    }

    pub fn changelog_path(&self) -> &str {
        self.changelog.path.as_deref().unwrap_or("CHANGELOG.md")
    }

    pub fn remote(&self) -> &str {
        self.release.remote.as_deref().unwrap_or("origin")
    }
}
