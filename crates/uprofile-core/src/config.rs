use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_limit = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "limit must be at least 1".to_string(),
            });
        }
        Ok(value)
    };

    let log_level = or_default("UPROFILE_LOG_LEVEL", "info");

    let base_url = or_default("UPROFILE_BASE_URL", DEFAULT_BASE_URL);
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "UPROFILE_BASE_URL".to_string(),
            reason: format!("expected an http(s) origin, got \"{base_url}\""),
        });
    }

    let user_agent = or_default("UPROFILE_USER_AGENT", DEFAULT_USER_AGENT);
    let request_timeout_secs = parse_u64("UPROFILE_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "UPROFILE_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }
    let request_pause_ms = parse_u64("UPROFILE_REQUEST_PAUSE_MS", "1000")?;
    let posts_limit = parse_limit("UPROFILE_POSTS_LIMIT", "50")?;
    let comments_limit = parse_limit("UPROFILE_COMMENTS_LIMIT", "100")?;

    Ok(AppConfig {
        log_level,
        base_url,
        user_agent,
        request_timeout_secs,
        request_pause_ms,
        posts_limit,
        comments_limit,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
