// src/shared/config.rs
use std::path::PathBuf;

use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::locale::Locale;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Header and titles shown by the admin console. Static data, handed to the
/// admin surface at startup.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminSiteConfig {
    pub site_header: String,
    pub site_title: String,
    pub index_title: String,
    pub site_url: String,
}

impl Default for AdminSiteConfig {
    fn default() -> Self {
        Self {
            site_header: "Portfolio - Administration".to_string(),
            site_title: "Portfolio Admin".to_string(),
            index_title: "Portfolio dashboard".to_string(),
            site_url: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub run_migrations: bool,
    pub media_url: String,
    pub public_base_url: Option<String>,
    pub static_dir: PathBuf,
    pub locale: Locale,
    pub admin_site: AdminSiteConfig,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = get("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or("PORT", get("PORT"), 8080u16)?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 10u32)?;
        let run_migrations = parse_bool("RUN_MIGRATIONS", get("RUN_MIGRATIONS"), false)?;

        let locale = match get("PORTFOLIO_LOCALE") {
            Some(value) => value.parse::<Locale>().map_err(|e| ConfigError::Invalid {
                key: "PORTFOLIO_LOCALE",
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => Locale::default(),
        };

        let defaults = AdminSiteConfig::default();
        let admin_site = AdminSiteConfig {
            site_header: get("ADMIN_SITE_HEADER").unwrap_or(defaults.site_header),
            site_title: get("ADMIN_SITE_TITLE").unwrap_or(defaults.site_title),
            index_title: get("ADMIN_INDEX_TITLE").unwrap_or(defaults.index_title),
            site_url: get("ADMIN_SITE_URL").unwrap_or(defaults.site_url),
        };

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            run_migrations,
            media_url: get("MEDIA_URL").unwrap_or_else(|| "/media/".to_string()),
            public_base_url: get("PUBLIC_BASE_URL"),
            static_dir: PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| "static".to_string())),
            locale,
            admin_site,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            value: value.clone(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_bool(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match raw.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Ok(true),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => Ok(false),
        Some(v) => Err(ConfigError::Invalid {
            key,
            value: v,
            reason: "expected a boolean".to_string(),
        }),
    }
}
