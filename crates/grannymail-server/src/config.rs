//! Server configuration for the GrannyMail website.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `GRANNYMAIL_*` environment variables.

use std::net::SocketAddr;

use grannymail_pages::layout::DEFAULT_SITE_URL;

/// Default listen port when neither `GRANNYMAIL_BIND_ADDR` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// Public origin used for canonical links.
    pub site_url: String,
    /// `max-age` in seconds for page responses.
    pub cache_max_age_secs: u64,
    /// Maximum number of requests handled at once.
    pub max_concurrent_requests: usize,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line (production).
    Json,
    /// Human-readable, coloured output (development).
    Pretty,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT`: port to bind on (platform convention, binds to `0.0.0.0`)
    /// - `GRANNYMAIL_BIND_ADDR`: full bind address (overrides `PORT`, default: `127.0.0.1:3000`)
    /// - `GRANNYMAIL_LOG_LEVEL`: log filter (default: `info`)
    /// - `GRANNYMAIL_LOG_FORMAT`: `json` or `pretty` (default: `json`)
    /// - `GRANNYMAIL_SITE_URL`: public origin (default: `https://www.grannymail.io`)
    /// - `GRANNYMAIL_CACHE_MAX_AGE`: seconds pages may be cached (default: `3600`)
    /// - `GRANNYMAIL_MAX_CONCURRENT_REQUESTS`: in-flight request limit (default: `512`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Priority: GRANNYMAIL_BIND_ADDR > PORT > default 127.0.0.1:3000
        let default_addr = SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT));
        let bind_addr = if let Some(addr) = lookup("GRANNYMAIL_BIND_ADDR") {
            addr.parse().unwrap_or(default_addr)
        } else if let Some(port_str) = lookup("PORT") {
            let port: u16 = port_str.parse().unwrap_or(DEFAULT_PORT);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            default_addr
        };

        let log_level = lookup("GRANNYMAIL_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let log_format = match lookup("GRANNYMAIL_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        };

        let site_url = lookup("GRANNYMAIL_SITE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_owned());

        let cache_max_age_secs = lookup("GRANNYMAIL_CACHE_MAX_AGE")
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        let max_concurrent_requests = lookup("GRANNYMAIL_MAX_CONCURRENT_REQUESTS")
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(512);

        Self {
            bind_addr,
            log_level,
            log_format,
            site_url,
            cache_max_age_secs,
            max_concurrent_requests,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
