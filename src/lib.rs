//! # PPT-GEN Client Library
//!
//! Client library for the PPT-GEN presentation-generation API. Provides
//! both library interfaces for programmatic use and CLI commands for
//! manual operations.

pub mod api_clients;
pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use api_clients::{GenerationApiClient, GenerationApiConfig};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use types::{GenerationRequest, GenerationResponse, HealthStatus, PresentationInfo, Template};
