//! Build-time configuration: the embedded `rackdash.toml` plus overrides
//! captured from the build environment.

use rackdash_app::config::{ClientConfig, ConfigError};

const DOCUMENT: &str = include_str!("../rackdash.toml");

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "RACKDASH_API_URL" => option_env!("RACKDASH_API_URL"),
        "RACKDASH_LOGIN_PATH" => option_env!("RACKDASH_LOGIN_PATH"),
        "RACKDASH_LOG" => option_env!("RACKDASH_LOG"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Load the embedded configuration.
///
/// # Errors
///
/// Returns the parse or validation error of the embedded document.
pub fn load() -> Result<ClientConfig, ConfigError> {
    ClientConfig::load(DOCUMENT, build_env)
}
