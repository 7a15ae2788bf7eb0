mod jwt_config;
mod jwt_verifier;

pub use jwt_config::AdminJwtConfig;
pub use jwt_verifier::{AdminClaims, JwtAdminTokenVerifier};
