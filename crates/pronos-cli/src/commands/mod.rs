//! CLI command implementations
//!
//! - `forecast` - Offline forecasting from a CSV or JSON file
//! - `serve` - Web server command

pub mod forecast;
pub mod serve;

// Re-export command functions for main.rs
pub use forecast::*;
pub use serve::*;
