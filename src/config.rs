//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export ENV="development"
//! export HTTP_SERVER_ADDRESS="0.0.0.0:8080"
//! export GRPC_BACKEND_ADDRESS="localhost:50051"
//! export UA_REGEXES_PATH="assets/regexes.yaml"
//! ```
//!
//! ## Optional Variables
//!
//! - `ENV` - Deployment environment (default: `production`)
//! - `HTTP_SERVER_ADDRESS` / `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `HTTP_SERVER_TIMEOUT` - Per-request timeout (default: `5s`)
//! - `GRPC_BACKEND_ADDRESS` - Backend address, `http://` assumed (default: `localhost:50051`)
//! - `GRPC_CLIENT_TIMEOUT` - Backend connect and resolve deadline (default: `5s`)
//! - `UA_REGEXES_PATH` - uap-core `regexes.yaml` (default: `assets/regexes.yaml`)
//! - `SHUTDOWN_GRACE_PERIOD` - Time in-flight requests get on shutdown (default: `10s`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - `text` or `json` (default: `json` in production, `text` otherwise)
//!
//! Durations take Go-style values (`500ms`, `5s`, `1m30s`); a bare number is seconds.

use anyhow::Result;
use humantime::format_duration;
use std::env;
use std::time::Duration;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: String,
    pub listen_addr: String,
    /// Server-level per-request timeout.
    pub http_timeout: Duration,
    pub backend_address: String,
    /// Connect timeout and resolve-call deadline.
    pub backend_timeout: Duration,
    /// Path to the uap-core signature database.
    pub regexes_path: String,
    /// How long in-flight requests may run after a shutdown signal.
    pub shutdown_grace: Duration,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so this only fails on malformed durations.
    ///
    /// # Errors
    ///
    /// Returns an error if a duration variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let env = env::var("ENV").unwrap_or_else(|_| "production".to_string());

        let listen_addr = env::var("HTTP_SERVER_ADDRESS")
            .or_else(|_| env::var("LISTEN"))
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let http_timeout = parse_duration("HTTP_SERVER_TIMEOUT", Duration::from_secs(5))?;

        let backend_address =
            env::var("GRPC_BACKEND_ADDRESS").unwrap_or_else(|_| "localhost:50051".to_string());

        let backend_timeout = parse_duration("GRPC_CLIENT_TIMEOUT", Duration::from_secs(5))?;

        let regexes_path =
            env::var("UA_REGEXES_PATH").unwrap_or_else(|_| "assets/regexes.yaml".to_string());

        let shutdown_grace = parse_duration("SHUTDOWN_GRACE_PERIOD", Duration::from_secs(10))?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| {
            let format = if env == "production" { "json" } else { "text" };
            format.to_string()
        });

        Ok(Self {
            env,
            listen_addr,
            http_timeout,
            backend_address,
            backend_timeout,
            regexes_path,
            shutdown_grace,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a timeout or the grace period is zero
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `backend_address` is not a valid URL once the scheme is defaulted
    /// - `regexes_path` is empty
    pub fn validate(&self) -> Result<()> {
        if self.http_timeout.is_zero() {
            anyhow::bail!("HTTP_SERVER_TIMEOUT must be greater than 0");
        }

        if self.backend_timeout.is_zero() {
            anyhow::bail!("GRPC_CLIENT_TIMEOUT must be greater than 0");
        }

        if self.shutdown_grace.is_zero() {
            anyhow::bail!("SHUTDOWN_GRACE_PERIOD must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "HTTP_SERVER_ADDRESS must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let backend_url = self.backend_url();
        match Url::parse(&backend_url) {
            Ok(url) if url.host_str().is_some() => {}
            _ => anyhow::bail!(
                "GRPC_BACKEND_ADDRESS must be 'host:port' or an absolute URL, got '{}'",
                self.backend_address
            ),
        }

        if self.regexes_path.is_empty() {
            anyhow::bail!("UA_REGEXES_PATH must not be empty");
        }

        Ok(())
    }

    /// Backend address with `http://` prepended when no scheme is given.
    pub fn backend_url(&self) -> String {
        if self.backend_address.contains("://") {
            self.backend_address.clone()
        } else {
            format!("http://{}", self.backend_address)
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Request timeout: {}", format_duration(self.http_timeout));
        tracing::info!("  Backend: {}", self.backend_url());
        tracing::info!("  Backend timeout: {}", format_duration(self.backend_timeout));
        tracing::info!("  Signature database: {}", self.regexes_path);
        tracing::info!("  Shutdown grace period: {}", format_duration(self.shutdown_grace));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads a duration from `key`, falling back to `default` when unset.
fn parse_duration(key: &str, default: Duration) -> Result<Duration> {
    match env::var(key) {
        Ok(raw) => parse_duration_value(&raw).map_err(|e| {
            anyhow::anyhow!("{key} must be a duration like '500ms', '5s' or '1m', got '{raw}': {e}")
        }),
        Err(_) => Ok(default),
    }
}

fn parse_duration_value(raw: &str) -> Result<Duration, humantime::DurationError> {
    let trimmed = raw.trim();
    if let Ok(secs) = trimmed.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }
    humantime::parse_duration(trimmed)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
