//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_search::SearchConfig;

/// Config file names looked up from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] = [
    "turbo-search.toml",
    ".turbo-search.toml",
    "turbo-search.json",
];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Service settings and backend endpoints.
    #[serde(flatten)]
    pub service: SearchConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Generate a default turbo-search.toml config file.
pub fn generate_default_config() -> String {
    r#"# TurboCommerce product search configuration

# Page size used when neither the backend nor the request has one.
default_page_size = 24

# Logged error messages are cut to this many characters.
log_message_limit = 60

[catalog]
endpoint = "https://catalog.example.com/graphql"
timeout_ms = 5000

[catalog.headers]
# "Magento-Environment-Id" = ""
# "Magento-Store-View-Code" = "default"

[search]
endpoint = "https://search.example.com/graphql"
timeout_ms = 5000

[search.headers]
# "x-api-key" = ""
"#
    .to_string()
}
