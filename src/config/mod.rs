//! Configuration module
//!
//! This module contains all configuration-related functionality
//! including display, behavior, and theme settings.

pub mod config;

pub use config::Config;
