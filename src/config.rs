use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fallback key for the public ReqRes instance.
pub const DEFAULT_API_KEY: &str = "reqres-free-v1";

/// Main configuration structure for the workflow runner
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReqresWorkflowConfig {
    /// Target API settings
    pub api: ApiConfig,
    /// Fixture settings
    pub fixtures: FixtureConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base origin of the API, e.g. https://reqres.in
    pub base_url: String,
    /// Path prefix prepended to every endpoint
    pub base_path: String,
    /// API key sent as the x-api-key header (can be set via env var)
    pub api_key: Option<String>,
}

impl ApiConfig {
    /// Effective key: configured value or the public fallback.
    pub fn key(&self) -> &str {
        self.api_key.as_deref().unwrap_or(DEFAULT_API_KEY)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FixtureConfig {
    /// Path to the user records fixture file
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Enable structured tracing output
    pub tracing_enabled: bool,
    /// Log level
    pub log_level: String,
}

impl Default for ReqresWorkflowConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://reqres.in".to_string(),
                base_path: "/api".to_string(),
                api_key: None, // Will be read from env var or fall back to DEFAULT_API_KEY
            },
            fixtures: FixtureConfig {
                path: "fixtures/users.json".to_string(),
            },
            observability: ObservabilityConfig {
                tracing_enabled: true,
                log_level: "info".to_string(),
            },
        }
    }
}

impl ReqresWorkflowConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (reqres-workflow.toml)
    /// 3. Environment variables (prefixed with REQRES_WORKFLOW_)
    pub fn load() -> Result<Self> {
        // Start from defaults so the crate runs without any file present
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if Path::new("reqres-workflow.toml").exists() {
            builder = builder.add_source(File::with_name("reqres-workflow"));
        }

        // Override with environment variables
        builder = builder.add_source(
            Environment::with_prefix("REQRES_WORKFLOW")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;

        let mut workflow_config: ReqresWorkflowConfig = config.try_deserialize()?;

        // Special handling for the API key - check the short env var too
        if workflow_config.api.api_key.is_none() {
            if let Ok(key) = std::env::var("REQRES_API_KEY") {
                workflow_config.api.api_key = Some(key);
            }
        }

        Ok(workflow_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<ReqresWorkflowConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = ReqresWorkflowConfig::load_env_file();
        ReqresWorkflowConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static ReqresWorkflowConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_public_instance() {
        let config = ReqresWorkflowConfig::default();
        assert_eq!(config.api.base_url, "https://reqres.in");
        assert_eq!(config.api.base_path, "/api");
        assert_eq!(config.api.key(), DEFAULT_API_KEY);
        assert_eq!(config.fixtures.path, "fixtures/users.json");
    }

    #[test]
    fn explicit_key_wins_over_fallback() {
        let mut config = ReqresWorkflowConfig::default();
        config.api.api_key = Some("secret".to_string());
        assert_eq!(config.api.key(), "secret");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reqres-workflow.toml");

        let config = ReqresWorkflowConfig::default();
        config.save_to_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let reloaded: ReqresWorkflowConfig = toml::from_str(&written).unwrap();
        assert_eq!(reloaded.api.base_url, config.api.base_url);
        assert_eq!(reloaded.observability.log_level, "info");
    }
}
