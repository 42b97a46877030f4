use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "lf_content.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub paths: PathConfig,
    pub auth: AuthConfig,
    pub engagement: EngagementConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    pub database_path: PathBuf, // content, likes, bookmarks and comments
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 secret used to verify access tokens.
    pub access_token_secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementConfig {
    pub toggle_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            paths: PathConfig {
                database_path: PathBuf::from("content.db"),
            },
            auth: AuthConfig {
                access_token_secret: "change-me".to_string(),
            },
            engagement: EngagementConfig {
                toggle_timeout_ms: 5_000,
            },
        }
    }
}

impl EngagementConfig {
    pub fn toggle_timeout(&self) -> Duration {
        Duration::from_millis(self.toggle_timeout_ms)
    }
}

impl Config {
    /// Loads the config file if present, then applies environment overrides.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str::<Config>(&content)?
        } else {
            Self::default()
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| format!("invalid PORT '{}': {}", port, e))?;
        }
        if let Some(path) = lookup("DATABASE_PATH") {
            self.paths.database_path = PathBuf::from(path);
        }
        if let Some(secret) = lookup("ACCESS_TOKEN_SECRET") {
            self.auth.access_token_secret = secret;
        }
        Ok(())
    }
}
