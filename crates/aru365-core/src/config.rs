use crate::app_config::{AppConfig, Environment};
use crate::booking::{DEFAULT_AFFILIATE_ID, DEFAULT_DESTINATION_URL, DEFAULT_PARTNER_ID};
use crate::ConfigError;

/// Default Viator Partner API base (sandbox). Production deployments set
/// `VIATOR_API_BASE_URL` explicitly.
pub const DEFAULT_VIATOR_API_BASE_URL: &str = "https://api.sandbox.viator.com/partner";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
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
/// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so absence is never an error; only malformed
/// values are rejected.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    // Blank values count as unset so an empty line in `.env` keeps the default.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { optional(var).unwrap_or_else(|| default.to_string()) };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("ARU365_ENV", "development"))?;

    let bind_addr = parse_addr("ARU365_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("ARU365_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default("ARU365_CATALOG_PATH", "./config/catalog.yaml"));
    let snapshot_path = PathBuf::from(or_default(
        "ARU365_SNAPSHOT_PATH",
        "./config/snapshots.yaml",
    ));
    let site_url = or_default("ARU365_SITE_URL", "https://aru365.com")
        .trim_end_matches('/')
        .to_string();

    let viator_api_key = optional("VIATOR_API_KEY");
    let viator_api_base_url = or_default("VIATOR_API_BASE_URL", DEFAULT_VIATOR_API_BASE_URL);
    let viator_request_timeout_secs = parse_u64("VIATOR_REQUEST_TIMEOUT_SECS", "30")?;
    if viator_request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "VIATOR_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let viator_destination_url = or_default("VIATOR_ARUBA_URL", DEFAULT_DESTINATION_URL);
    let viator_partner_id = or_default("VIATOR_AFFILIATE_PID", DEFAULT_PARTNER_ID);
    let viator_affiliate_id = or_default("VIATOR_AFFILIATE_MCID", DEFAULT_AFFILIATE_ID);

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_path,
        snapshot_path,
        site_url,
        viator_api_key,
        viator_api_base_url,
        viator_request_timeout_secs,
        viator_destination_url,
        viator_partner_id,
        viator_affiliate_id,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Typos such as `"producton"` are rejected rather than silently treated as
/// development.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "production" => Ok(Environment::Production),
        "test" => Ok(Environment::Test),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ARU365_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
