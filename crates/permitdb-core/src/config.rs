use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
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

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        optional(var).unwrap_or_else(|| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("PERMITDB_ENV", "development"))?;

    let database_url = optional("DATABASE_URL");
    if database_url.is_none() && env == Environment::Production {
        return Err(ConfigError::MissingEnvVar("DATABASE_URL".to_string()));
    }

    let bind_addr = parse_addr("PERMITDB_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PERMITDB_LOG_LEVEL", "info");

    let default_state = parse_state_code(&or_default("PERMITDB_DEFAULT_STATE", "GA"))?;

    let search_limit = or_default("PERMITDB_SEARCH_LIMIT", "10")
        .parse::<usize>()
        .map_err(|e| invalid("PERMITDB_SEARCH_LIMIT", e.to_string()))?;
    if search_limit == 0 {
        return Err(invalid(
            "PERMITDB_SEARCH_LIMIT",
            "must be at least 1".to_string(),
        ));
    }

    let locationiq_access_token = optional("LOCATIONIQ_ACCESS_TOKEN");
    let google_maps_api_key = optional("GOOGLE_MAPS_API_KEY");
    let geocode_timeout_secs = parse_u64("PERMITDB_GEOCODE_TIMEOUT_SECS", "10")?;

    let db_max_connections = parse_u32("PERMITDB_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("PERMITDB_DB_MIN_CONNECTIONS", "1")?;
    if db_min_connections > db_max_connections {
        return Err(invalid(
            "PERMITDB_DB_MIN_CONNECTIONS",
            format!("must not exceed PERMITDB_DB_MAX_CONNECTIONS ({db_max_connections})"),
        ));
    }
    let db_acquire_timeout_secs = parse_u64("PERMITDB_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        default_state,
        search_limit,
        locationiq_access_token,
        google_maps_api_key,
        geocode_timeout_secs,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PERMITDB_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

/// Accept a two-letter state code in any case and return it uppercased.
fn parse_state_code(s: &str) -> Result<String, ConfigError> {
    let code = s.trim().to_uppercase();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(code)
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: "PERMITDB_DEFAULT_STATE".to_string(),
            reason: format!("expected a two-letter state code; got \"{s}\""),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
