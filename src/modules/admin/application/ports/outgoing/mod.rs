pub mod admin_token_verifier;
pub mod stats_query;

pub use admin_token_verifier::{AdminTokenError, AdminTokenVerifier};
pub use stats_query::{StatsQuery, StatsQueryError};
