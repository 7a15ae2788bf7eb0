pub mod api;
pub mod config;
pub mod locale;
pub mod media;
