//! Pointforge Engine library.
//!
//! ## Structure
//!
//! - `infrastructure/` - Document sources (ports + JSON file adapters), settings, and caching
//! - `use_cases/` - Pricing and sheet reports over the pure domain

pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for loading `test_data/` documents.
#[cfg(test)]
pub mod test_fixtures;
