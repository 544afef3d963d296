//! Configuration loading — TOML document with environment overrides.
//!
//! The dashboard embeds `rackdash.toml` at build time. Every field has a
//! sensible default so the document may be empty. Overrides take precedence
//! over document values and are read through an injected lookup so the same
//! code serves build-time variables in the browser and plain maps in tests.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend location.
    pub api: ApiConfig,
    /// Session pages.
    pub session: SessionConfig,
    /// Theme persistence and assets.
    pub theme: ThemeConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Backend location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix of every request. Empty means same origin.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Where to send the browser after logout.
    pub login_path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Local-storage key holding `dark` or `light`.
    pub storage_key: String,
    pub logo_light: String,
    pub logo_dark: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl ClientConfig {
    /// Parse a TOML document, apply overrides from `lookup`, then validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or a value is invalid.
    pub fn load<F>(document: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(document)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("RACKDASH_API_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = lookup("RACKDASH_LOGIN_PATH") {
            self.session.login_path = val;
        }
        if let Some(val) = lookup("RACKDASH_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.api.base_url;
        if !base_url.is_empty() {
            let scheme_ok = ["http://", "https://", "/"]
                .iter()
                .any(|prefix| base_url.starts_with(prefix));
            if !scheme_ok {
                return Err(ConfigError::Validation(format!(
                    "base_url must start with http://, https:// or /: {base_url}"
                )));
            }
            if base_url.ends_with('/') {
                return Err(ConfigError::Validation(
                    "base_url must not end with /".to_string(),
                ));
            }
        }
        if !self.session.login_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "login_path must start with /".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute (or origin-relative) URL of a backend path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api.base_url)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            logo_light: "/static/img/logo.svg".to_string(),
            logo_dark: "/static/img/logo-dark.svg".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config document")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.session.login_path, "/login");
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.theme.logo_dark, "/static/img/logo-dark.svg");
        assert_eq!(config.theme.logo_light, "/static/img/logo.svg");
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn should_load_empty_document() {
        let config = ClientConfig::load("", no_env).unwrap();
        assert_eq!(config.session.login_path, "/login");
    }

    #[test]
    fn should_parse_full_document() {
        let toml = "
            [api]
            base_url = 'https://rack.example.com'

            [session]
            login_path = '/auth/login'

            [theme]
            storage_key = 'rackdash-theme'
            logo_light = '/img/light.svg'
            logo_dark = '/img/dark.svg'

            [logging]
            filter = 'debug'
        ";
        let config = ClientConfig::load(toml, no_env).unwrap();
        assert_eq!(config.api.base_url, "https://rack.example.com");
        assert_eq!(config.session.login_path, "/auth/login");
        assert_eq!(config.theme.storage_key, "rackdash-theme");
        assert_eq!(config.theme.logo_light, "/img/light.svg");
        assert_eq!(config.theme.logo_dark, "/img/dark.svg");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_keep_defaults_for_missing_sections() {
        let toml = "
            [logging]
            filter = 'warn'
        ";
        let config = ClientConfig::load(toml, no_env).unwrap();
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.theme.storage_key, "theme");
    }

    #[test]
    fn should_apply_overrides_over_document() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("RACKDASH_API_URL", "http://localhost:8000"),
            ("RACKDASH_LOGIN_PATH", "/signin"),
            ("RACKDASH_LOG", "rackdash_app=trace"),
        ]);
        let toml = "
            [api]
            base_url = 'https://rack.example.com'
        ";
        let config =
            ClientConfig::load(toml, |key| env.get(key).map(ToString::to_string)).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.session.login_path, "/signin");
        assert_eq!(config.logging.filter, "rackdash_app=trace");
    }

    #[test]
    fn should_accept_origin_relative_base_url() {
        let mut config = ClientConfig::default();
        config.api.base_url = "/backend".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_base_url_without_scheme() {
        let mut config = ClientConfig::default();
        config.api.base_url = "rack.example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_base_url_with_trailing_slash() {
        let mut config = ClientConfig::default();
        config.api.base_url = "https://rack.example.com/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_relative_login_path() {
        let mut config = ClientConfig::default();
        config.session.login_path = "login".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_join_base_url_and_path() {
        let mut config = ClientConfig::default();
        assert_eq!(config.url("/api/hosts"), "/api/hosts");
        config.api.base_url = "https://rack.example.com".to_string();
        assert_eq!(config.url("/api/hosts"), "https://rack.example.com/api/hosts");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result = ClientConfig::load("invalid {{{", no_env);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
