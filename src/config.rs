mod cors;
mod server;

pub use cors::{validate_origin, CorsConfig, DEFAULT_ALLOWED_ORIGINS, WILDCARD_ORIGIN};
pub use server::ServerConfig;

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let defaults = ServerConfig::default();
        let server_host = env::var("SERVER_HOST").unwrap_or(defaults.host);
        let server_port = match env::var("SERVER_PORT") {
            Ok(port) => parse_port(&port)?,
            Err(_) => defaults.port,
        };

        // CORS config
        let cors = match env::var("ALLOWED_ORIGINS") {
            Ok(origins) => CorsConfig::from_list(&origins),
            Err(_) => CorsConfig::default(),
        };

        let config = Config {
            server: ServerConfig {
                host: server_host,
                port: server_port,
            },
            cors,
        };

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(AppError::Configuration(
                "SERVER_HOST cannot be empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "SERVER_PORT must be greater than 0".to_string(),
            ));
        }

        self.cors.validate()
    }
}

fn parse_port(raw: &str) -> AppResult<u16> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Configuration(format!("Invalid SERVER_PORT: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.addr(), "127.0.0.1:8000");
        assert_eq!(config.cors, CorsConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port(" 3001 ").unwrap(), 3001);
        assert!(matches!(parse_port("not_a_port"), Err(AppError::Configuration(_))));
        assert!(matches!(parse_port("70000"), Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let config = Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 0,
            },
            cors: CorsConfig::default(),
        };
        assert!(matches!(config.validate(), Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let config = Config {
            server: ServerConfig {
                host: "  ".to_string(),
                port: 8000,
            },
            cors: CorsConfig::default(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_propagates_origin_errors() {
        let config = Config {
            server: ServerConfig::default(),
            cors: CorsConfig::from_list("http://localhost:3000/"),
        };
        assert!(matches!(config.validate(), Err(AppError::InvalidOrigin(_))));
    }
}
