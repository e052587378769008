// src/core/config_manager.rs
//! Unified configuration: `config.yaml` profile plus environment overrides.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::chat::ChatTiming;
use crate::page::{PageLayout, DEFAULT_NAVBAR_OFFSET};
use crate::utils::mask_secret;

const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigManager {
    pub server: ServerSettings,
    pub email: EmailConfig,
    pub chat: ChatConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub api_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient: String,
    pub timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.emailjs.com".to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            recipient: "prskhsl@gmail.com".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl EmailConfig {
    pub fn is_configured(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub reply_delay_min_ms: u64,
    pub reply_delay_max_ms: u64,
    pub welcome_delay_ms: u64,
    pub navigation_delay_ms: u64,
    /// Sessions untouched for this long are torn down.
    pub session_idle_secs: u64,
    pub max_sessions: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_min_ms: 1000,
            reply_delay_max_ms: 2000,
            welcome_delay_ms: 300,
            navigation_delay_ms: 1000,
            session_idle_secs: 1800,
            max_sessions: 1000,
        }
    }
}

impl ChatConfig {
    pub fn timing(&self) -> ChatTiming {
        ChatTiming {
            reply_delay_min: Duration::from_millis(self.reply_delay_min_ms),
            reply_delay_max: Duration::from_millis(self.reply_delay_max_ms),
            welcome_delay: Duration::from_millis(self.welcome_delay_ms),
            navigation_delay: Duration::from_millis(self.navigation_delay_ms),
        }
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub navbar_offset: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_offset: DEFAULT_NAVBAR_OFFSET,
        }
    }
}

impl PageConfig {
    pub fn layout(&self) -> PageLayout {
        PageLayout::new(self.navbar_offset)
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: Option<ConfigManager>,
    production: Option<ConfigManager>,
}

impl ConfigManager {
    /// Load the profile for the current environment, falling back to
    /// built-in defaults when no config file exists.
    pub fn load() -> Result<Self> {
        let environment = Self::environment();
        let path = std::env::var("PORTFOLIO_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        info!("Loading configuration for environment: {}", environment);

        let mut config = if path.exists() {
            Self::load_from_file(&path, &environment)?
        } else {
            warn!("{} not found, using built-in defaults", path.display());
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.log_summary();
        Ok(config)
    }

    pub fn environment() -> String {
        std::env::var("PORTFOLIO_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Pick the `production` profile for "production", `local` otherwise.
    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile =
            serde_yaml::from_str(content).context("Invalid configuration YAML")?;

        let profile = match environment {
            "production" => file.production,
            _ => file.local,
        };

        Ok(profile.unwrap_or_default())
    }

    /// Apply `ROCKET_PORT` and `EMAILJS_*` overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("ROCKET_PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!("Ignoring invalid ROCKET_PORT value: {}", port),
            }
        }
        if let Some(value) = lookup("EMAILJS_SERVICE_ID") {
            self.email.service_id = value;
        }
        if let Some(value) = lookup("EMAILJS_TEMPLATE_ID") {
            self.email.template_id = value;
        }
        if let Some(value) = lookup("EMAILJS_PUBLIC_KEY") {
            self.email.public_key = value;
        }
    }

    fn log_summary(&self) {
        info!("Server: {}:{}", self.server.address, self.server.port);
        info!(
            "Email delivery: service {}, template {}, key {}",
            mask_secret(&self.email.service_id),
            mask_secret(&self.email.template_id),
            mask_secret(&self.email.public_key)
        );
        if !self.email.is_configured() {
            warn!("Email delivery is not configured, contact submissions will fail");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const YAML: &str = r#"
local:
  server:
    port: 9000
  chat:
    reply_delay_min_ms: 10
    reply_delay_max_ms: 20
production:
  email:
    service_id: service_prod
    template_id: template_prod
    public_key: key_prod
  page:
    navbar_offset: 64
"#;

    #[test]
    fn test_local_profile() {
        let config = ConfigManager::from_yaml(YAML, "local").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.address, "0.0.0.0");
        assert_eq!(config.chat.timing().reply_delay_max, Duration::from_millis(20));
        assert_eq!(config.chat.welcome_delay_ms, 300);
        assert_eq!(config.chat.session_idle_timeout(), Duration::from_secs(1800));
        assert_eq!(config.chat.max_sessions, 1000);
        assert!(!config.email.is_configured());
    }

    #[test]
    fn test_production_profile() {
        let config = ConfigManager::from_yaml(YAML, "production").unwrap();
        assert!(config.email.is_configured());
        assert_eq!(config.page.layout().navbar_offset, 64);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_unknown_environment_uses_local() {
        let config = ConfigManager::from_yaml(YAML, "staging").unwrap();
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(ConfigManager::from_yaml("local: [", "local").is_err());
    }

    #[test]
    fn test_environment_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ROCKET_PORT", "8123"),
            ("EMAILJS_SERVICE_ID", "svc"),
            ("EMAILJS_TEMPLATE_ID", "tpl"),
            ("EMAILJS_PUBLIC_KEY", "pk"),
        ]
        .into_iter()
        .collect();

        let mut config = ConfigManager::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 8123);
        assert_eq!(config.email.service_id, "svc");
        assert!(config.email.is_configured());
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = ConfigManager::default();
        config.apply_overrides(|key| (key == "ROCKET_PORT").then(|| "http".to_string()));
        assert_eq!(config.server.port, 8000);
    }
}
