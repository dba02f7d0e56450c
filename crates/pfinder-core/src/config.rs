use std::net::{IpAddr, SocketAddr};

use crate::app_config::{AppConfig, Environment, PresenterConfig};
use crate::tier::DEFAULT_FREE_RESULTS;
use crate::ConfigError;

const DEFAULT_PORT: &str = "4000";
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
/// Rainforest API request endpoint.
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://api.rainforestapi.com/request";
/// Amazon marketplace searched unless `PFINDER_AMAZON_DOMAIN` overrides it.
pub const DEFAULT_AMAZON_DOMAIN: &str = "amazon.com";
const DEFAULT_PROXY_URL: &str = "http://localhost:4000";

/// Load proxy server configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load proxy server configuration from variables already in the process.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load presenter configuration, reading `.env` first.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_presenter_config() -> Result<PresenterConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_presenter_config_from_env()
}

/// Load presenter configuration from variables already in the process.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_presenter_config_from_env() -> Result<PresenterConfig, ConfigError> {
    build_presenter_config(|key| std::env::var(key))
}

/// Build server configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let rainforest_api_key = lookup("RAINFOREST_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar("RAINFOREST_API_KEY".to_string()))?;

    let env = parse_environment(&or_default("PFINDER_ENV", "development"));
    let log_level = or_default("PFINDER_LOG_LEVEL", "info");

    let host = or_default("PFINDER_BIND_HOST", DEFAULT_BIND_HOST)
        .parse::<IpAddr>()
        .map_err(|e| invalid("PFINDER_BIND_HOST", e.to_string()))?;
    let port = or_default("PORT", DEFAULT_PORT)
        .parse::<u16>()
        .map_err(|e| invalid("PORT", e.to_string()))?;
    let bind_addr = SocketAddr::new(host, port);

    let provider_base_url = or_default("PFINDER_PROVIDER_BASE_URL", DEFAULT_PROVIDER_BASE_URL);
    let amazon_domain = or_default("PFINDER_AMAZON_DOMAIN", DEFAULT_AMAZON_DOMAIN);
    if amazon_domain.trim().is_empty() {
        return Err(invalid(
            "PFINDER_AMAZON_DOMAIN",
            "must not be blank".to_string(),
        ));
    }

    let provider_timeout_secs = or_default("PFINDER_PROVIDER_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("PFINDER_PROVIDER_TIMEOUT_SECS", e.to_string()))?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        rainforest_api_key,
        provider_base_url,
        amazon_domain,
        provider_timeout_secs,
    })
}

fn build_presenter_config<F>(lookup: F) -> Result<PresenterConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("PFINDER_ENV", "development"));
    let log_level = or_default("PFINDER_LOG_LEVEL", "info");
    let proxy_url = or_default("PFINDER_PROXY_URL", DEFAULT_PROXY_URL);
    let free_results = or_default("PFINDER_FREE_RESULTS", &DEFAULT_FREE_RESULTS.to_string())
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "PFINDER_FREE_RESULTS".to_string(),
            reason: e.to_string(),
        })?;

    Ok(PresenterConfig {
        env,
        log_level,
        proxy_url,
        free_results,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
