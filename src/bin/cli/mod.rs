//! CLI module for the PPT-GEN CLI tool
//!
//! This module organizes all CLI-related functionality including
//! command structures and their handlers.

pub mod commands;

pub use commands::{handle_config_command, handle_presentation_command, handle_system_command};
