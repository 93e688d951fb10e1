//! Infrastructure layer - document sources, settings, and caching.

pub mod cache;
pub mod json_files;
pub mod ports;
pub mod settings;
