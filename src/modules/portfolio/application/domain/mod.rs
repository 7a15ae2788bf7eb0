pub mod duration;
pub mod entities;
