use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed. Every option has a default; nothing is required.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
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

    let log_level = or_default("DEALSCOUT_LOG_LEVEL", "info");
    let providers_path = PathBuf::from(or_default(
        "DEALSCOUT_PROVIDERS_PATH",
        "./config/providers.yaml",
    ));
    let profile_path = PathBuf::from(or_default(
        "DEALSCOUT_PROFILE_PATH",
        "./config/profile.yaml",
    ));

    let request_timeout_secs = parse_u64("DEALSCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("DEALSCOUT_USER_AGENT", "dealscout/0.1 (vacation-deals)");
    let max_retries = parse_u32("DEALSCOUT_MAX_RETRIES", "2")?;
    let retry_backoff_base_secs = parse_u64("DEALSCOUT_RETRY_BACKOFF_BASE_SECS", "2")?;
    let inter_provider_delay_ms = parse_u64("DEALSCOUT_INTER_PROVIDER_DELAY_MS", "500")?;

    Ok(AppConfig {
        log_level,
        providers_path,
        profile_path,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        inter_provider_delay_ms,
    })
}
