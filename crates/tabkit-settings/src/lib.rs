//! Tabkit Settings Crate
//!
//! Loads and saves the artifact calibration tables and output preferences.

pub mod config;
pub mod error;

pub use config::{Config, OutputSettings};
pub use error::{SettingsError, SettingsResult};
