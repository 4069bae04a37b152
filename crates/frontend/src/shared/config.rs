use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Префикс ajax-путей на том же origin, что и страница
    pub ajax_prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            ajax_prefix: "/ajax".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub start_in_edit_mode: bool,
}

/// client.toml embedded in the bundle; keys it omits keep their defaults
const EMBEDDED_CONFIG: &str = include_str!("../../client.toml");

static CONFIG: Lazy<ClientConfig> = Lazy::new(|| match parse_config(EMBEDDED_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::error!("client.toml is invalid, using defaults: {}", e);
        ClientConfig::default()
    }
});

pub fn parse_config(contents: &str) -> Result<ClientConfig, String> {
    toml::from_str(contents).map_err(|e| format!("{}", e))
}

/// Configuration used by the running application
pub fn config() -> &'static ClientConfig {
    &CONFIG
}
