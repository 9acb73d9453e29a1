//! Configuration loading: API base URL and data directory resolution

use crate::{Error, Result};
use std::path::PathBuf;

/// Environment variable naming the matchmaking service base URL
pub const API_URL_ENV: &str = "QUADRAL_API_URL";
/// Environment variable naming the local data directory
pub const DATA_DIR_ENV: &str = "QUADRAL_DATA_DIR";

/// Compiled default service address (local development server)
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// API base URL resolution, priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`api_base_url` key)
/// 4. Compiled default (fallback)
pub fn resolve_api_base_url(cli_arg: Option<&str>, env_var_name: &str) -> String {
    let raw = resolve_setting(cli_arg, env_var_name, "api_base_url")
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    raw.trim_end_matches('/').to_string()
}

/// Data directory resolution (identity record lives here), priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`data_dir` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_data_dir(cli_arg: Option<&str>, env_var_name: &str) -> PathBuf {
    resolve_setting(cli_arg, env_var_name, "data_dir")
        .map(PathBuf::from)
        .unwrap_or_else(default_data_dir)
}

fn resolve_setting(cli_arg: Option<&str>, env_var_name: &str, config_key: &str) -> Option<String> {
    // Priority 1: Command-line argument
    if let Some(value) = cli_arg {
        return Some(value.to_string());
    }

    // Priority 2: Environment variable
    if let Ok(value) = std::env::var(env_var_name) {
        if !value.is_empty() {
            return Some(value);
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(value) = config.get(config_key).and_then(|v| v.as_str()) {
                    return Some(value.to_string());
                }
            }
        }
    }

    None
}

/// Get configuration file path for the platform
fn locate_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/quadral/config.toml first, then /etc/quadral/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("quadral").join("config.toml"));
        let system_config = PathBuf::from("/etc/quadral/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let config_path = dirs::config_dir()
        .map(|d| d.join("quadral").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if config_path.exists() {
        Ok(config_path)
    } else {
        Err(Error::Config(format!(
            "Config file not found: {config_path:?}"
        )))
    }
}

/// OS-dependent default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("quadral"))
        .unwrap_or_else(|| PathBuf::from("./quadral_data"))
}
