//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MySQL host
    pub db_host: String,
    /// MySQL port
    pub db_port: u16,
    /// MySQL user
    pub db_user: String,
    /// MySQL password
    pub db_password: String,
    /// Database name
    pub db_name: String,
    /// Connection pool capacity
    pub db_max_connections: u32,

    /// HTTP listen port
    pub server_port: u16,

    /// Origins allowed by the CORS layer
    pub allowed_origins: Vec<String>,

    /// Rate-limit window in milliseconds (surfaced, no limiter is mounted)
    pub rate_limit_window_ms: u64,
    /// Rate-limit request ceiling per window
    pub rate_limit_max_requests: u32,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            db_port: env::var("DB_PORT")
                .unwrap_or_else(|_| "3306".to_string())
                .parse()
                .context("DB_PORT must be a valid port number")?,
            db_user: env::var("DB_USER").context("DB_USER environment variable is required")?,
            db_password: env::var("DB_PASSWORD")
                .context("DB_PASSWORD environment variable is required")?,
            db_name: env::var("DB_NAME").context("DB_NAME environment variable is required")?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a number")?,

            server_port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,

            allowed_origins: parse_origins(env::var("ALLOWED_ORIGINS").ok()),

            rate_limit_window_ms: env::var("RATE_LIMIT_WINDOW_MS")
                .unwrap_or_else(|_| "900000".to_string())
                .parse()
                .context("RATE_LIMIT_WINDOW_MS must be a number")?,
            rate_limit_max_requests: env::var("RATE_LIMIT_MAX_REQUESTS")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .context("RATE_LIMIT_MAX_REQUESTS must be a number")?,
        })
    }
}

fn parse_origins(raw: Option<String>) -> Vec<String> {
    match raw {
        Some(list) if !list.trim().is_empty() => list
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect(),
        _ => vec!["http://localhost:3000".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_defaults_to_localhost() {
        assert_eq!(parse_origins(None), vec!["http://localhost:3000"]);
        assert_eq!(
            parse_origins(Some("  ".to_string())),
            vec!["http://localhost:3000"]
        );
    }

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins(Some(
            "https://board.example.com, https://bot.example.com".to_string(),
        ));
        assert_eq!(
            origins,
            vec!["https://board.example.com", "https://bot.example.com"]
        );
    }
}
