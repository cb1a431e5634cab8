/*
 * Responsibility
 * - 環境変数や設定の読み込み (DATABASE_URL, SESSION_SECRET, sqids 設定など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::net::SocketAddr;

use thiserror::Error;

// Signed cookies need a 64-byte master key.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // None => in-memory store (development only)
    pub database_url: Option<String>,
    pub database_max_connections: u32,

    // None => random key per process (development only)
    pub session_secret: Option<String>,

    pub sqids_min_length: usize,
    pub sqids_alphabet: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source (the process env in `from_env`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let database_url = lookup("DATABASE_URL").filter(|s| !s.trim().is_empty());
        if database_url.is_none() && app_env.is_production() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let database_max_connections: u32 = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"))?,
            None => 5,
        };

        let session_secret = lookup("SESSION_SECRET").filter(|s| !s.is_empty());
        match &session_secret {
            Some(secret) if secret.len() < MIN_SESSION_SECRET_LEN => {
                return Err(ConfigError::Invalid("SESSION_SECRET"));
            }
            None if app_env.is_production() => {
                return Err(ConfigError::Missing("SESSION_SECRET"));
            }
            _ => {}
        }

        let sqids_min_length: usize = match lookup("SQIDS_MIN_LENGTH") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("SQIDS_MIN_LENGTH"))?,
            None => 10,
        };

        let sqids_alphabet = lookup("SQIDS_ALPHABET").unwrap_or_else(|| {
            "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".to_string()
        });

        Ok(Self {
            addr,
            app_env,
            database_url,
            database_max_connections,
            session_secret,
            sqids_min_length,
            sqids_alphabet,
        })
    }
}
