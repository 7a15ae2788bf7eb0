pub mod jwt;
mod stats_query_postgres;

pub use stats_query_postgres::StatsQueryPostgres;
