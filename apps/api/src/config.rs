use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default cap on completion output, in tokens.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1000;

/// Application configuration loaded from environment variables.
///
/// The completion credential is optional here: a missing key is reported per
/// request as a configuration error instead of aborting startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub documents_dir: PathBuf,
    pub profile_path: Option<PathBuf>,
    pub max_output_tokens: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_process_env()
    }

    /// Builds the config from the process environment only, without reading `.env`.
    fn from_process_env() -> Result<Self> {
        Ok(Config {
            anthropic_api_key: optional_env("CLAUDE_API_KEY")
                .or_else(|| optional_env("ANTHROPIC_API_KEY")),
            documents_dir: optional_env("DOCUMENTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("documents")),
            profile_path: optional_env("PROFILE_PATH").map(PathBuf::from),
            max_output_tokens: match optional_env("MAX_OUTPUT_TOKENS") {
                Some(raw) => raw
                    .parse::<u32>()
                    .context("MAX_OUTPUT_TOKENS must be a positive integer")?,
                None => DEFAULT_MAX_OUTPUT_TOKENS,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating unset and blank values the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
