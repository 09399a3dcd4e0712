use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    /// Serve the generated OpenAPI document.
    pub openapi_enabled: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            service_name: "calculator-service".to_string(),
            openapi_enabled: true,
        }
    }
}

impl CalculatorConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let defaults = Self::default();

        Ok(CalculatorConfig {
            common,
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            openapi_enabled: parse_bool("OPENAPI_ENABLED", defaults.openapi_enabled)?,
        })
    }
}

fn parse_bool(key: &str, default: bool) -> Result<bool, AppError> {
    parse_bool_value(key, env::var(key).ok(), default)
}

fn parse_bool_value(key: &str, value: Option<String>, default: bool) -> Result<bool, AppError> {
    match value {
        Some(val) => val.trim().parse().map_err(|_| {
            AppError::ConfigError(anyhow::anyhow!(
                "{} must be 'true' or 'false', got '{}'",
                key,
                val
            ))
        }),
        None => Ok(default),
    }
}
