use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration, loaded once at startup.
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Static landing page served at `/` when the file is readable.
    pub landing_page: PathBuf,
    pub shutdown_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            landing_page: PathBuf::from(
                env::var("LANDING_PAGE").unwrap_or_else(|_| "./static/index.html".to_string()),
            ),
            shutdown_timeout_secs: env::var("SHUTDOWN_TIMEOUT")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,
        })
    }

    /// Base URL advertised in the manifest. Clients join tool endpoints
    /// onto this, so it carries no trailing slash.
    pub fn base_url(&self) -> String {
        // 0.0.0.0 is a bind address, not a reachable one
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            &self.host
        };
        format!("http://{}:{}", host, self.port)
    }
}

/// Client configuration, passed explicitly into `ToolClient::new`.
/// There is deliberately no process-wide URL constant.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Base URL from `TOOLBELT_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        Self::new(env::var("TOOLBELT_URL").unwrap_or_else(|_| "http://localhost:8000".to_string()))
    }
}
