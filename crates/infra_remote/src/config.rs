//! Remote collaborator configuration

use serde::Deserialize;

/// Connection settings for the collaborator API
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the collaborator API, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl RemoteConfig {
    /// Loads configuration from the environment (`INVOICE_API_*` variables),
    /// falling back to the defaults for anything unset
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        config::Config::builder()
            .set_default("base_url", "http://localhost:4000/api")?
            .set_default("timeout_secs", 30i64)?
            .add_source(config::Environment::with_prefix("INVOICE_API"))
            .build()?
            .try_deserialize()
    }
}
