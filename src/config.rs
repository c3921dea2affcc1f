use std::{env, fmt::Display, str::FromStr};

use anyhow::Context;
use tracing::info;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_TOKENS_PATH: &str = "/tokens";
pub const DEFAULT_PATIENT_REGISTER_PATH: &str = "/api/patients/register";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_base_url: String,
    pub tokens_path: String,
    pub patient_register_path: String,
}

impl Config {
    /// Reads every setting from the environment, falling back to the local defaults.
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            port: try_load("QFLOW_PORT", DEFAULT_PORT)?,
            api_base_url: load_or("QFLOW_API_BASE_URL", DEFAULT_API_BASE_URL),
            tokens_path: load_or("QFLOW_TOKENS_PATH", DEFAULT_TOKENS_PATH),
            patient_register_path: load_or(
                "QFLOW_PATIENT_REGISTER_PATH",
                DEFAULT_PATIENT_REGISTER_PATH,
            ),
        })
    }

    /// Defaults only, pointed at the given backend.
    #[cfg(test)]
    pub fn with_base_url(api_base_url: &str) -> Self {
        Self {
            port: 0,
            api_base_url: api_base_url.to_string(),
            tokens_path: DEFAULT_TOKENS_PATH.to_string(),
            patient_register_path: DEFAULT_PATIENT_REGISTER_PATH.to_string(),
        }
    }
}

fn load_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = load_or(key, default);
    raw.parse()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value: {raw}"))
}
