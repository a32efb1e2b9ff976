//! Feature modules
//!
//! - export: writes the active view to CSV or JSON
pub mod export;
