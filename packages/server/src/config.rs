use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use common::config::SourceAppConfig;
use common::config::{
    ENV_PREFIX, config_path, default_base_url, default_timeout_secs, default_user_agent,
};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    /// Allowed origins. `"*"` allows any origin; empty disables CORS headers.
    #[serde(default)]
    pub allow_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

fn default_cors_max_age() -> u64 {
    3600
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub source: SourceAppConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("source.base_url", default_base_url())?
            .set_default("source.timeout_secs", default_timeout_secs())?
            .set_default("source.user_agent", default_user_agent())?
            // Load from config/config.toml (or $SKIPWATCH_CONFIG)
            .add_source(File::with_name(&config_path()).required(false))
            // Override from environment (e.g., SKIPWATCH__SOURCE__BASE_URL)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allow_origins")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
