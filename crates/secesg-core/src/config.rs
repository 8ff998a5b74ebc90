use std::collections::HashMap;
use std::env::VarError;

use crate::app_config::{AppConfig, Environment, MatchMode};
use crate::ConfigError;

/// Load application configuration from environment variables, with
/// `overrides` (keyed by env var name) taking precedence.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// Overridden values replace the env value before validation, so an invalid
/// env var never fails a run that supplies its own value.
///
/// # Errors
///
/// Returns `ConfigError` if an effective value is present but invalid.
pub fn load_app_config(overrides: &HashMap<&str, String>) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(with_overrides(overrides, |key| std::env::var(key)))
}

/// Layer `overrides` over `lookup`. An override wins whenever present.
pub fn with_overrides<'a, F>(
    overrides: &'a HashMap<&'a str, String>,
    lookup: F,
) -> impl Fn(&str) -> Result<String, VarError> + 'a
where
    F: Fn(&str) -> Result<String, VarError> + 'a,
{
    move |key| match overrides.get(key) {
        Some(value) => Ok(value.clone()),
        None => lookup(key),
    }
}

/// Check that `raw` is a four-digit year, returning it trimmed.
///
/// # Errors
///
/// Returns a human-readable reason when `raw` is not four ASCII digits.
pub fn parse_year(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.len() == 4 && trimmed.chars().all(|c| c.is_ascii_digit()) {
        Ok(trimmed.to_string())
    } else {
        Err(format!("'{raw}' is not a four-digit year"))
    }
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// `HashMap` lookup.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` naming the first invalid variable.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let year = |var: &str, default: &str| -> Result<String, ConfigError> {
        parse_year(&or_default(var, default)).map_err(|reason| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason,
        })
    };

    let env = parse_environment(&or_default("SECESG_ENV", "development"))?;
    let log_level = or_default("SECESG_LOG_LEVEL", "info");
    let corpus_path = PathBuf::from(or_default(
        "SECESG_CORPUS_PATH",
        "./edgar_data/all_processed_docs.json",
    ));
    let keywords_path = lookup("SECESG_KEYWORDS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let baseline_year = year("SECESG_BASELINE_YEAR", "2020")?;
    let comparison_year = year("SECESG_COMPARISON_YEAR", "2024")?;

    let match_mode = or_default("SECESG_MATCH_MODE", "substring")
        .parse::<MatchMode>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "SECESG_MATCH_MODE".to_string(),
            reason,
        })?;

    Ok(AppConfig {
        env,
        log_level,
        corpus_path,
        keywords_path,
        baseline_year,
        comparison_year,
        match_mode,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SECESG_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}
