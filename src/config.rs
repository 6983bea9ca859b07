/*
 * Responsibility
 * - 環境変数や設定の読み込み (STORE_BASE_URL, POSTS_PER_PAGE など)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STORE_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_POSTS_PER_PAGE: usize = 6;
pub const MAX_POSTS_PER_PAGE: usize = 1000;
pub const DEFAULT_STORE_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub store_base_url: Url,
    pub store_timeout: Duration,
    pub request_timeout: Duration,

    pub posts_per_page: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (env in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => DEFAULT_PORT,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = lookup("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let raw_base_url =
            lookup("STORE_BASE_URL").unwrap_or_else(|| DEFAULT_STORE_BASE_URL.to_string());
        let store_base_url = parse_base_url(&raw_base_url)?;

        let store_timeout_seconds = match lookup("STORE_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("STORE_TIMEOUT_SECONDS"))?,
            None => DEFAULT_STORE_TIMEOUT_SECONDS,
        };

        let request_timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?,
            None => DEFAULT_REQUEST_TIMEOUT_SECONDS,
        };

        let posts_per_page = match lookup("POSTS_PER_PAGE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=MAX_POSTS_PER_PAGE).contains(n))
                .ok_or(ConfigError::Invalid("POSTS_PER_PAGE"))?,
            None => DEFAULT_POSTS_PER_PAGE,
        };

        Ok(Self {
            addr,
            app_env,
            store_base_url,
            store_timeout: Duration::from_secs(store_timeout_seconds.max(1)),
            request_timeout: Duration::from_secs(request_timeout_seconds.max(1)),
            posts_per_page,
        })
    }
}

// The store URL is joined with relative paths later, so it must end with a slash.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Missing("STORE_BASE_URL"));
    }

    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|_| ConfigError::Invalid("STORE_BASE_URL"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::Invalid("STORE_BASE_URL")),
    }
}
