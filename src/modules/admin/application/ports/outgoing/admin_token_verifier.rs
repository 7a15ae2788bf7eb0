use crate::modules::admin::application::domain::entities::AdminIdentity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminTokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Token is not yet valid")]
    NotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token was issued by an unknown issuer")]
    InvalidIssuer,

    #[error("Malformed token")]
    Malformed,

    #[error("Token does not grant admin access")]
    NotAdmin,
}

/// Checks bearer tokens minted by the external identity provider.
pub trait AdminTokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<AdminIdentity, AdminTokenError>;
}
