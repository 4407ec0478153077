//! Configuration

use clap::Args;
use reqwest::Url;
use thiserror::Error;

/// Production API base URL.
pub const PRODUCTION_API_URL: &str = "https://gsap-landing-backend.onrender.com/api";

/// Development API base URL.
pub const DEVELOPMENT_API_URL: &str = "http://localhost:5000/api";

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API base URL could not be parsed.
    #[error("invalid API base URL {url}: {reason}")]
    InvalidApiUrl {
        /// Rejected URL
        url: String,

        /// Parser message
        reason: String,
    },
}

/// Deployment environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Environment {
    /// Hosted backend
    #[default]
    Production,

    /// Local backend
    Development,
}

impl Environment {
    /// Default API base URL for this environment.
    pub fn default_api_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_API_URL,
            Environment::Development => DEVELOPMENT_API_URL,
        }
    }
}

/// Remote API settings.
#[derive(Debug, Clone, Args)]
pub struct ApiConfig {
    /// Deployment environment (production, development)
    #[arg(long, env = "STOREFRONT_ENV", value_enum, default_value_t = Environment::Production)]
    pub environment: Environment,

    /// API base URL; overrides the environment default
    #[arg(long, env = "STOREFRONT_API_URL")]
    pub api_url: Option<String>,
}

impl ApiConfig {
    /// Settings for `environment` with no override.
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            api_url: None,
        }
    }

    /// Resolved base URL, always ending in `/` so endpoint paths join
    /// beneath it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL does not parse or
    /// cannot carry a path.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let raw = self
            .api_url
            .as_deref()
            .unwrap_or_else(|| self.environment.default_api_url());

        let with_slash = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };

        let url = Url::parse(&with_slash).map_err(|error| ConfigError::InvalidApiUrl {
            url: raw.to_string(),
            reason: error.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiUrl {
                url: raw.to_string(),
                reason: "URL cannot be a base".to_string(),
            });
        }

        Ok(url)
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn environment_selects_default_url() -> TestResult {
        let production = ApiConfig::for_environment(Environment::Production).base_url()?;
        let development = ApiConfig::for_environment(Environment::Development).base_url()?;

        assert_eq!(
            production.as_str(),
            "https://gsap-landing-backend.onrender.com/api/"
        );
        assert_eq!(development.as_str(), "http://localhost:5000/api/");

        Ok(())
    }

    #[test]
    fn override_wins() -> TestResult {
        let config = ApiConfig {
            environment: Environment::Production,
            api_url: Some("http://127.0.0.1:9000/v2/".to_string()),
        };

        assert_eq!(config.base_url()?.as_str(), "http://127.0.0.1:9000/v2/");

        Ok(())
    }

    #[test]
    fn rejects_garbage() {
        let config = ApiConfig {
            environment: Environment::Production,
            api_url: Some("not a url".to_string()),
        };

        assert!(matches!(
            config.base_url(),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
    }
}
