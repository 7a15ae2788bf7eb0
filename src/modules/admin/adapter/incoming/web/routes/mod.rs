mod get_dashboard_stats;
mod get_site_config;

pub use get_dashboard_stats::*;
pub use get_site_config::*;
