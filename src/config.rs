use anyhow::{Context, Result};

/// Default base URL of the Google web translation endpoint
pub const DEFAULT_TRANSLATE_API_URL: &str = "https://translate.googleapis.com";

/// Default directory holding the browser client assets
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub static_dir: String,

    // Translation provider
    pub translate_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v
                    .parse()
                    .with_context(|| format!("PORT must be a valid port number, got '{}'", v))?,
                Err(_) => 5000,
            },
            debug: std::env::var("DEBUG")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),

            // Translation provider
            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string()),
        })
    }

    /// Address the HTTP server binds to, e.g. "0.0.0.0:5000"
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
