use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail startup; everything else has a default.
#[derive(Clone)]
pub struct Config {
    /// Absent means the chat relay answers 503 without calling upstream.
    pub anthropic_api_key: Option<String>,
    pub data_dir: PathBuf,
    pub resume_dir: PathBuf,
    pub resume_file_stem: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            anthropic_api_key: optional("ANTHROPIC_API_KEY"),
            data_dir: optional("DATA_DIR")
                .unwrap_or_else(|| "data".to_string())
                .into(),
            resume_dir: optional("RESUME_DIR")
                .unwrap_or_else(|| "public".to_string())
                .into(),
            resume_file_stem: optional("RESUME_FILE_STEM")
                .unwrap_or_else(|| "Resume".to_string()),
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

// Hand-written so the API key never ends up in a log line.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("anthropic_api_key", &self.anthropic_api_key.as_ref().map(|_| "<redacted>"))
            .field("data_dir", &self.data_dir)
            .field("resume_dir", &self.resume_dir)
            .field("resume_file_stem", &self.resume_file_stem)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}
