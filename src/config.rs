//! Application configuration loaded from environment variables.
//!
//! Every value has a default, so the service starts with no environment set
//! and listens on `0.0.0.0:6459`.

use anyhow::{Context, anyhow};
use envconfig::Envconfig;
use log::LevelFilter;
use std::{str::FromStr, sync::OnceLock};

#[derive(Envconfig, Clone, Debug)]
pub struct AppConfig {
    /// Host address for web server binding
    /// Example: "0.0.0.0", "127.0.0.1"
    #[envconfig(from = "WEB_SERVER_HOST", default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding
    #[envconfig(from = "WEB_SERVER_PORT", default = "6459")]
    pub web_server_port: u16,

    /// Number of server workers, ntex picks one per core when unset
    #[envconfig(from = "WEB_SERVER_WORKERS")]
    pub web_server_workers: Option<usize>,

    /// Values: "off", "error", "warn", "info", "debug", "trace"
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level_filter(&self) -> anyhow::Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| anyhow!("invalid LOG_LEVEL value: {}", self.log_level))
    }

    /// Address the server binds to
    pub fn server_addr(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }
}

/// Global application configuration, set once by [init_config]
pub static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Loads [AppConfig] from the environment and stores it in [APP_CONFIG].
///
/// Calling it again returns the configuration loaded the first time.
pub fn init_config() -> anyhow::Result<&'static AppConfig> {
    if let Some(app_config) = APP_CONFIG.get() {
        return Ok(app_config);
    }

    let app_config = AppConfig::init_from_env().context("failed to load app config")?;
    app_config.log_level_filter()?;

    Ok(APP_CONFIG.get_or_init(|| app_config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, envconfig::Error> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<String, String>>();

        AppConfig::init_from_hashmap(&vars)
    }

    #[test]
    fn test_defaults() {
        let app_config = config_from(&[]).unwrap();

        assert_eq!(app_config.server_addr(), ("0.0.0.0".to_string(), 6459));
        assert_eq!(app_config.web_server_workers, None);
        assert_eq!(app_config.log_level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_values_from_env() {
        let app_config = config_from(&[
            ("WEB_SERVER_HOST", "127.0.0.1"),
            ("WEB_SERVER_PORT", "8080"),
            ("WEB_SERVER_WORKERS", "2"),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();

        assert_eq!(app_config.server_addr(), ("127.0.0.1".to_string(), 8080));
        assert_eq!(app_config.web_server_workers, Some(2));
        assert_eq!(app_config.log_level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("WEB_SERVER_PORT", "not-a-port")]).is_err());

        let app_config = config_from(&[("LOG_LEVEL", "loud")]).unwrap();
        assert!(app_config.log_level_filter().is_err());
    }
}
