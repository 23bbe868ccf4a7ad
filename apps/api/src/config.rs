use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Everything has a sensible default; the service starts with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Defensive cap on uploaded resume size (bytes).
    pub max_upload_bytes: usize,
    /// Optional JSON file overriding the built-in skill catalog.
    pub skill_catalog_path: Option<PathBuf>,
    /// Optional JSON file overriding the built-in job postings.
    pub job_catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            skill_catalog_path: std::env::var("SKILL_CATALOG_PATH").ok().map(PathBuf::from),
            job_catalog_path: std::env::var("JOB_CATALOG_PATH").ok().map(PathBuf::from),
        })
    }
}
