use std::env;

use crate::shared::config::ConfigError;

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_ISSUER: &str = "portfolio-admin";

#[derive(Debug, Clone)]
pub struct AdminJwtConfig {
    pub secret_key: String,
    pub issuer: String,
}

impl AdminJwtConfig {
    /// Load from the environment. `Ok(None)` means the admin surface is
    /// disabled because no secret is configured.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = match lookup("ADMIN_JWT_SECRET").filter(|s| !s.trim().is_empty()) {
            Some(secret) => secret,
            None => return Ok(None),
        };

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "ADMIN_JWT_SECRET",
                value: "<redacted>".to_string(),
                reason: format!("must be at least {MIN_SECRET_LEN} characters long"),
            });
        }

        let issuer = lookup("ADMIN_JWT_ISSUER")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ISSUER.to_string());

        Ok(Some(Self { secret_key, issuer }))
    }
}
