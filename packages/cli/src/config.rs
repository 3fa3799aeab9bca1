use common::SourceAppConfig;
use common::config::{
    ENV_PREFIX, config_path, default_base_url, default_timeout_secs, default_user_agent,
};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CliConfig {
    #[serde(default)]
    source: SourceAppConfig,
}

/// Command-line values that take precedence over file and environment config.
#[derive(Debug, Default, Clone)]
pub struct SourceOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Load the `source` section: defaults, then config file, then
/// `SKIPWATCH__SOURCE__*` environment, then command-line overrides.
pub fn load_source_config(overrides: &SourceOverrides) -> Result<SourceAppConfig, ConfigError> {
    let s = Config::builder()
        .set_default("source.base_url", default_base_url())?
        .set_default("source.timeout_secs", default_timeout_secs())?
        .set_default("source.user_agent", default_user_agent())?
        .add_source(File::with_name(&config_path()).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .set_override_option("source.base_url", overrides.base_url.clone())?
        .set_override_option("source.timeout_secs", overrides.timeout_secs)?
        .build()?;

    let cfg: CliConfig = s.try_deserialize()?;
    Ok(cfg.source)
}
