use crate::types::HttpMethod;
use color_eyre::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default log destination; the terminal itself belongs to the UI
pub const DEFAULT_LOG_FILE: &str = "/tmp/lazy-postman-tui.log";

/// Read-only settings. Nothing typed in the UI is ever written back.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub request: RequestConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Prefill for the URL input
    pub url: Option<String>,
    /// Initial method; unknown names fall back to GET
    pub method: Option<String>,
    /// Initial JSON editor text, replacing the empty-object skeleton
    pub body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: PathBuf,
    /// EnvFilter directive, e.g. "debug" or "lazy_postman_tui=trace"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LOG_FILE),
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        // Use ~/.config instead of platform-specific directory
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        Ok(home_dir
            .join(".config")
            .join("lazy-postman-tui")
            .join("config.toml"))
    }

    /// Load config from the default location, or defaults if there is none
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn initial_method(&self) -> HttpMethod {
        self.request
            .method
            .as_deref()
            .and_then(HttpMethod::parse)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert!(config.request.url.is_none());
        assert_eq!(config.initial_method(), HttpMethod::Get);
        assert_eq!(config.logging.file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
            [request]
            url = "http://localhost:3000/todos"
            method = "post"
            body = '{"title": "draft"}'

            [logging]
            file = "/var/tmp/postman.log"
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.request.url.as_deref(),
            Some("http://localhost:3000/todos")
        );
        assert_eq!(config.initial_method(), HttpMethod::Post);
        assert_eq!(config.request.body.as_deref(), Some(r#"{"title": "draft"}"#));
        assert_eq!(config.logging.file, PathBuf::from("/var/tmp/postman.log"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_unknown_method_falls_back_to_get() {
        let config = Config::parse("[request]\nmethod = \"TRACE\"\n").unwrap();
        assert_eq!(config.initial_method(), HttpMethod::Get);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::parse("[request\nurl = 1").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/lazy-postman-tui.toml")).unwrap();
        assert!(config.request.method.is_none());
    }
}
