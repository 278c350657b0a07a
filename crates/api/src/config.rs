//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the academy
//! portal server. It retrieves configuration values from environment
//! variables and provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `ACADEMY_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `ACADEMY_PORT`: The port to listen on (default: 3000)
//! - `ACADEMY_DATA_DIR`: Directory for the local store and session cache (default: "./data")
//! - `SUPABASE_URL` / `SUPABASE_KEY`: Remote tabular backend; when both are
//!   present every entity operation targets the remote store instead of the
//!   local one
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `ACADEMY_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `ACADEMY_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)

use std::env;
use std::path::PathBuf;

use academy_store::RemoteConfig;
use eyre::{Result, WrapErr};
use tracing::Level;

/// Configuration for the academy portal server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Directory holding the local collection files and the session cache
    pub data_dir: PathBuf,

    /// Remote backend connection details; presence selects the remote store
    pub remote: Option<RemoteConfig>,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ACADEMY_PORT` cannot be parsed as a u16.
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("ACADEMY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("ACADEMY_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid ACADEMY_PORT value")?;

        // Storage settings: the remote backend is selected once, here, by
        // the presence of its connection configuration.
        let data_dir = env::var("ACADEMY_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let remote = match (env::var("SUPABASE_URL"), env::var("SUPABASE_KEY")) {
            (Ok(url), Ok(key)) if !url.is_empty() && !key.is_empty() => {
                Some(RemoteConfig { url, key })
            }
            _ => None,
        };

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("ACADEMY_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("ACADEMY_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Ok(Self {
            host,
            port,
            data_dir,
            remote,
            log_level,
            cors_origins,
            request_timeout,
        })
    }

    /// Returns the server address as a string, e.g. "127.0.0.1:3000".
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
