use std::env;

use reqwest::Url;

use crate::error::AppError;
use crate::viz::Theme;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendConfig,
    pub request: RequestConfig,
    pub limits: InputLimits,
    pub logging: LoggingConfig,
    pub theme: Theme,
}

/// Analysis backend configuration
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// HTTP request configuration. Calls are attempted once.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub timeout_ms: u64,
}

/// Limits applied to user input before it is sent for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct InputLimits {
    /// Maximum text length, in characters.
    pub max_text_chars: usize,
    /// Maximum image payload size, in bytes.
    pub max_image_bytes: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = env::var("ANALYSIS_API_BASE_URL")
            .unwrap_or_else(|_| BackendConfig::default().base_url);
        Url::parse(&base_url).map_err(|e| AppError::Config {
            message: format!("ANALYSIS_API_BASE_URL is not a valid URL ({}): {}", base_url, e),
        })?;
        let backend = BackendConfig { base_url };

        let request = RequestConfig {
            timeout_ms: parse_env("REQUEST_TIMEOUT_MS").unwrap_or(30000),
        };

        let defaults = InputLimits::default();
        let limits = InputLimits {
            max_text_chars: parse_env("MAX_TEXT_CHARS").unwrap_or(defaults.max_text_chars),
            max_image_bytes: parse_env("MAX_IMAGE_BYTES").unwrap_or(defaults.max_image_bytes),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let theme = match env::var("THEME_PRIMARY") {
            Ok(primary) if !primary.trim().is_empty() => {
                Theme::default().with_primary(primary.trim())
            }
            _ => Theme::default(),
        };

        Ok(Config {
            backend,
            request,
            limits,
            logging,
            theme,
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self { timeout_ms: 30000 }
    }
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_text_chars: 5000,
            max_image_bytes: 16 * 1024 * 1024,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            request: RequestConfig::default(),
            limits: InputLimits::default(),
            logging: LoggingConfig::default(),
            theme: Theme::default(),
        }
    }
}
