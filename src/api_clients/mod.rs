//! API Client Modules
//!
//! HTTP clients for communicating with the presentation-generation
//! backend: submitting generations, fetching result metadata, and
//! downloading generated artifacts.

pub mod generation_client;

pub use generation_client::{GenerationApiClient, GenerationApiConfig};
