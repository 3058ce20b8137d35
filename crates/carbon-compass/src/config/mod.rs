use crate::footprint::RecommendationLimits;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub recommendations: RecommendationLimits,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("COMPASS_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("COMPASS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("COMPASS_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("COMPASS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = RecommendationLimits::default();
        let recommendations = RecommendationLimits {
            per_category: positive_limit(
                "COMPASS_RECOMMENDATIONS_PER_CATEGORY",
                defaults.per_category,
            )?,
            total: positive_limit("COMPASS_RECOMMENDATIONS_TOTAL", defaults.total)?,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            recommendations,
        })
    }
}

fn positive_limit(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(ConfigError::InvalidLimit { key, value: raw }),
        },
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidLimit { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "COMPASS_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "COMPASS_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLimit { key, value } => {
                write!(f, "{key} must be a positive integer (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidLimit { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("COMPASS_ENV");
        env::remove_var("COMPASS_HOST");
        env::remove_var("COMPASS_PORT");
        env::remove_var("COMPASS_LOG_LEVEL");
        env::remove_var("COMPASS_RECOMMENDATIONS_PER_CATEGORY");
        env::remove_var("COMPASS_RECOMMENDATIONS_TOTAL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.recommendations, RecommendationLimits::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("COMPASS_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_recommendation_limits() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("COMPASS_RECOMMENDATIONS_PER_CATEGORY", "2");
        env::set_var("COMPASS_RECOMMENDATIONS_TOTAL", "5");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.recommendations.per_category, 2);
        assert_eq!(config.recommendations.total, 5);
        reset_env();
    }

    #[test]
    fn rejects_zero_recommendation_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("COMPASS_RECOMMENDATIONS_TOTAL", "0");
        let error = AppConfig::load().expect_err("zero limit rejected");
        assert!(matches!(
            error,
            ConfigError::InvalidLimit {
                key: "COMPASS_RECOMMENDATIONS_TOTAL",
                ..
            }
        ));
        reset_env();
    }

    #[test]
    fn environment_names_are_case_insensitive() {
        assert_eq!(AppEnvironment::from_str(" PROD "), AppEnvironment::Production);
        assert_eq!(AppEnvironment::from_str("ci"), AppEnvironment::Test);
        assert_eq!(AppEnvironment::from_str("staging"), AppEnvironment::Development);
    }
}
