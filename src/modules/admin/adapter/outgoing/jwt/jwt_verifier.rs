use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::modules::admin::application::domain::entities::AdminIdentity;
use crate::modules::admin::application::ports::outgoing::{AdminTokenError, AdminTokenVerifier};

use super::jwt_config::AdminJwtConfig;

const ADMIN_ROLE: &str = "admin";

/// Claims expected in an admin bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub iss: String,
    pub role: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
}

#[derive(Clone)]
pub struct JwtAdminTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtAdminTokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtAdminTokenVerifier").finish_non_exhaustive()
    }
}

impl JwtAdminTokenVerifier {
    pub fn new(config: &AdminJwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            validation,
        }
    }
}

impl AdminTokenVerifier for JwtAdminTokenVerifier {
    fn verify(&self, token: &str) -> Result<AdminIdentity, AdminTokenError> {
        let decoded = decode::<AdminClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Admin token rejected: expired");
                        AdminTokenError::Expired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Admin token rejected: not yet valid");
                        AdminTokenError::NotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: admin token with invalid signature");
                        AdminTokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Admin token rejected: unexpected issuer");
                        AdminTokenError::InvalidIssuer
                    }
                    _ => {
                        tracing::warn!("Admin token rejected: {}", e);
                        AdminTokenError::Malformed
                    }
                }
            })?;

        if decoded.claims.role != ADMIN_ROLE {
            tracing::warn!(
                "Admin token rejected: subject {} has role '{}'",
                decoded.claims.sub,
                decoded.claims.role
            );
            return Err(AdminTokenError::NotAdmin);
        }

        Ok(AdminIdentity {
            subject: decoded.claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn config() -> AdminJwtConfig {
        AdminJwtConfig {
            secret_key: SECRET.to_string(),
            issuer: "auth.me.dev".to_string(),
        }
    }

    fn token(secret: &str, iss: &str, role: &str, exp_offset_secs: i64) -> String {
        let now = Utc::now();
        let claims = AdminClaims {
            sub: "owner".to_string(),
            iss: iss.to_string(),
            role: role.to_string(),
            exp: (now + Duration::seconds(exp_offset_secs)).timestamp(),
            iat: Some(now.timestamp()),
            nbf: None,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn accepts_admin_token() {
        let verifier = JwtAdminTokenVerifier::new(&config());
        let identity = verifier
            .verify(&token(SECRET, "auth.me.dev", "admin", 600))
            .unwrap();
        assert_eq!(identity.subject, "owner");
    }

    #[test]
    fn rejects_non_admin_role() {
        let verifier = JwtAdminTokenVerifier::new(&config());
        let err = verifier
            .verify(&token(SECRET, "auth.me.dev", "editor", 600))
            .unwrap_err();
        assert_eq!(err, AdminTokenError::NotAdmin);
    }

    #[test]
    fn rejects_wrong_issuer() {
        let verifier = JwtAdminTokenVerifier::new(&config());
        let err = verifier
            .verify(&token(SECRET, "someone-else", "admin", 600))
            .unwrap_err();
        assert_eq!(err, AdminTokenError::InvalidIssuer);
    }

    #[test]
    fn rejects_wrong_secret() {
        let verifier = JwtAdminTokenVerifier::new(&config());
        let err = verifier
            .verify(&token(
                "ffffffffffffffffffffffffffffffff",
                "auth.me.dev",
                "admin",
                600,
            ))
            .unwrap_err();
        assert_eq!(err, AdminTokenError::InvalidSignature);
    }

    #[test]
    fn rejects_expired_token_beyond_leeway() {
        let verifier = JwtAdminTokenVerifier::new(&config());
        let err = verifier
            .verify(&token(SECRET, "auth.me.dev", "admin", -120))
            .unwrap_err();
        assert_eq!(err, AdminTokenError::Expired);
    }

    #[test]
    fn rejects_garbage() {
        let verifier = JwtAdminTokenVerifier::new(&config());
        assert_eq!(
            verifier.verify("not-a-jwt").unwrap_err(),
            AdminTokenError::Malformed
        );
    }
}
