use crate::error::{config_error, env_error, AppResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use url::Url;

/// Default location of the optional configuration file
pub const CONFIG_FILE: &str = "config/calview.toml";

/// Default page title
pub const DEFAULT_PAGE_TITLE: &str = "Calendar";

/// Default outbound fetch timeout in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the service
#[derive(Debug, Clone)]
pub struct Config {
    /// ICS feed fetched on every request
    pub feed_url: String,
    /// Address the HTTP server binds to
    pub host: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Upper bound for a single feed fetch
    pub fetch_timeout_secs: u64,
    /// Timezone used to turn event start times into calendar dates
    pub timezone: String,
    /// Title shown on the rendered page
    pub page_title: String,
}

/// Values that may be set in `config/calview.toml`
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub feed_url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub fetch_timeout_secs: Option<u64>,
    pub timezone: Option<String>,
    pub page_title: Option<String>,
}

impl Config {
    /// Load configuration from `.env`, the config file and the environment
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let file = if Path::new(CONFIG_FILE).exists() {
            let content = fs::read_to_string(CONFIG_FILE)?;
            ConfigFile::parse(&content)?
        } else {
            ConfigFile::default()
        };

        let overrides = ConfigFile {
            feed_url: env::var("FEED_URL").ok(),
            host: env::var("HOST").ok(),
            port: env::var("PORT")
                .ok()
                .map(|p| {
                    p.parse::<u16>()
                        .map_err(|_| config_error("Invalid PORT format"))
                })
                .transpose()?,
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .map(|t| {
                    t.parse::<u64>()
                        .map_err(|_| config_error("Invalid FETCH_TIMEOUT_SECS format"))
                })
                .transpose()?,
            timezone: env::var("TIMEZONE").ok(),
            page_title: env::var("PAGE_TITLE").ok(),
        };

        Self::from_layers(file, overrides)
    }

    /// Merge file values with overrides (overrides win) and validate the result
    pub fn from_layers(file: ConfigFile, overrides: ConfigFile) -> AppResult<Self> {
        let feed_url = overrides
            .feed_url
            .or(file.feed_url)
            .ok_or_else(|| env_error("FEED_URL"))?;

        let config = Config {
            feed_url,
            host: overrides
                .host
                .or(file.host)
                .unwrap_or_else(|| String::from("127.0.0.1")),
            port: overrides.port.or(file.port).unwrap_or(3000),
            fetch_timeout_secs: overrides
                .fetch_timeout_secs
                .or(file.fetch_timeout_secs)
                .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS),
            timezone: overrides
                .timezone
                .or(file.timezone)
                .unwrap_or_else(|| String::from("UTC")),
            page_title: overrides
                .page_title
                .or(file.page_title)
                .unwrap_or_else(|| String::from(DEFAULT_PAGE_TITLE)),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check the values that would otherwise only fail on the first request
    pub fn validate(&self) -> AppResult<()> {
        self.feed_url()?;
        self.tz()?;
        if self.fetch_timeout_secs == 0 {
            return Err(config_error("FETCH_TIMEOUT_SECS must be greater than zero"));
        }
        Ok(())
    }

    /// The feed URL as fetched over HTTP; `webcal://` is served over https
    pub fn feed_url(&self) -> AppResult<Url> {
        let url = Url::parse(&self.feed_url)
            .map_err(|e| config_error(&format!("Invalid feed URL {}: {}", self.feed_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            // set_scheme refuses to move between special and non-special schemes
            "webcal" => Url::parse(&url.as_str().replacen("webcal:", "https:", 1))
                .map_err(|e| config_error(&format!("Failed to rewrite webcal URL: {}", e))),
            other => Err(config_error(&format!(
                "Unsupported feed URL scheme: {}",
                other
            ))),
        }
    }

    /// Parsed display timezone
    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Unknown timezone: {}", self.timezone)))
    }
}

impl ConfigFile {
    /// Parse the TOML configuration file contents
    pub fn parse(content: &str) -> AppResult<Self> {
        Ok(toml::from_str::<ConfigFile>(content)?)
    }
}
