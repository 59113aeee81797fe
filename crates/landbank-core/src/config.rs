use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://landbank-ef9x.onrender.com/api";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so only malformed values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let api_base_url = parse_api_base_url(&or_default("LANDBANK_API_URL", DEFAULT_API_BASE_URL))
        .map_err(|reason| invalid("LANDBANK_API_URL", reason))?;

    let env = parse_environment(&or_default("LANDBANK_ENV", "development"))?;

    let bind_addr = or_default("LANDBANK_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("LANDBANK_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("LANDBANK_LOG_LEVEL", "info");

    let request_timeout_secs = or_default("LANDBANK_REQUEST_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("LANDBANK_REQUEST_TIMEOUT_SECS", e.to_string()))?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "LANDBANK_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let user_agent = or_default("LANDBANK_USER_AGENT", "landbank/0.1 (listing-explorer)");

    Ok(AppConfig {
        api_base_url,
        env,
        bind_addr,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

/// Strip trailing slashes and require an http(s) scheme.
fn parse_api_base_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err("must not be empty".to_string());
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(format!("'{trimmed}' is not an http(s) URL"));
    }
    Ok(trimmed.to_string())
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LANDBANK_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
