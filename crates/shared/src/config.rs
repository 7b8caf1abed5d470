//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Open-banking aggregator configuration.
    #[serde(default)]
    pub aggregator: AggregatorConfig,
    /// Analysis configuration.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// How transactions and connect tokens are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregatorMode {
    /// Talk to the real aggregator API.
    #[default]
    Live,
    /// Serve a canned token and transaction list. Never used implicitly.
    Demo,
}

/// Open-banking aggregator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregatorConfig {
    /// Live or demo mode.
    #[serde(default)]
    pub mode: AggregatorMode,
    /// Aggregator API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Client id issued by the aggregator.
    #[serde(default)]
    pub client_id: String,
    /// Client secret issued by the aggregator.
    #[serde(default)]
    pub client_secret: String,
    /// Number of transactions requested in the single page fetched.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            mode: AggregatorMode::default(),
            base_url: default_base_url(),
            client_id: String::new(),
            client_secret: String::new(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.pluggy.ai".to_string()
}

fn default_page_size() -> u32 {
    100
}

fn default_timeout_secs() -> u64 {
    30
}

/// Analysis configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Size of the transaction window, counted back from today.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            lookback_days: default_lookback_days(),
        }
    }
}

fn default_lookback_days() -> u32 {
    30
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINPULSE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
