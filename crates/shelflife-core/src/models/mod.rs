//! Data models shared across the library.

pub mod config;
pub mod parsed;

pub use config::ShelflifeConfig;
pub use parsed::{Confidence, ParsedDate};
