use serde::Deserialize;

/// Submission source configuration shared by the server and the CLI.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SourceAppConfig {
    /// Codeforces API base URL. Default: "https://codeforces.com/api".
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds. Default: 30.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent header sent upstream. Default: "skipwatch/<version>".
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

pub fn default_base_url() -> String {
    "https://codeforces.com/api".into()
}
pub fn default_timeout_secs() -> u64 {
    30
}
pub fn default_user_agent() -> String {
    concat!("skipwatch/", env!("CARGO_PKG_VERSION")).into()
}

impl Default for SourceAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Environment variable naming the config file (without extension).
pub const CONFIG_PATH_ENV: &str = "SKIPWATCH_CONFIG";
/// Config file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/config";
/// Prefix for environment overrides, e.g. `SKIPWATCH__SOURCE__BASE_URL`.
pub const ENV_PREFIX: &str = "SKIPWATCH";

/// Resolve the config file path from the environment.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}
