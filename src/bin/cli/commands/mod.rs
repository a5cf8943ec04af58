//! Command handlers for the PPT-GEN CLI
//!
//! This module contains all command handler implementations, decomposed by command category.

pub mod config;
pub mod presentation;
pub mod system;

pub use config::handle_config_command;
pub use presentation::handle_presentation_command;
pub use system::handle_system_command;
