//! Configuration module for the feed service.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Populate the feed with the two demo posts at startup
    pub seed_posts: bool,
    /// Page reference handed out with native share payloads
    pub page_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("MINISOCIAL_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|_| {
            AppError::BadRequest(format!("Invalid MINISOCIAL_BIND_ADDR: {}", bind_addr))
        })?;

        let log_level = env::var("MINISOCIAL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_posts = env::var("MINISOCIAL_SEED_POSTS")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        let page_url = env::var("MINISOCIAL_PAGE_URL")
            .unwrap_or_else(|_| format!("http://{}/", bind_addr));

        Ok(Self {
            bind_addr,
            log_level,
            seed_posts,
            page_url,
        })
    }
}

/// Anything other than an explicit "off" value enables the flag.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("MINISOCIAL_BIND_ADDR");
        env::remove_var("MINISOCIAL_LOG_LEVEL");
        env::remove_var("MINISOCIAL_SEED_POSTS");
        env::remove_var("MINISOCIAL_PAGE_URL");

        let config = Config::from_env().unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.seed_posts);
        assert_eq!(config.page_url, "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
        assert!(!parse_flag("0"));
    }
}
