use anyhow::{Context, Result};

use crate::nexus::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Missing Nexus credentials are a startup-time fatal condition, never a
/// per-call error.
#[derive(Debug, Clone)]
pub struct Config {
    pub nexus_base_url: String,
    pub nexus_api_key: String,
    pub nexus_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            nexus_base_url: require_env("NEXUS_BASE_URL")?,
            nexus_api_key: require_env("NEXUS_API_KEY")?,
            nexus_model: std::env::var("NEXUS_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
