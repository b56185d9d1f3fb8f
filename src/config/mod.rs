//! Configuration module for the PsstBin client
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (API endpoint, defaults)

pub mod paths;
pub mod settings;

pub use paths::PsstPaths;
pub use settings::Settings;
