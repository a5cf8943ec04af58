//! Wire types for the generation API contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Request body for submitting a generation
///
/// Serialized field names follow the backend contract exactly, including
/// the camelCase `includeCode` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    /// Template identifier, see [`Template`] for the catalog
    pub template: u8,
    #[serde(rename = "includeCode")]
    pub include_code: bool,
}

/// Response from a generation submission
///
/// The backend's success body is service-defined. The named fields are the
/// ones the client reads; everything else is preserved in `extra` so the
/// parsed body round-trips unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentation_id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Result metadata for a generated presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationInfo {
    /// Identifier used to build the artifact's download URL
    pub presentation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Failure body shape returned by the backend on non-success statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Catalog of visual styles offered by the generation backend
///
/// The wire format is the numeric identifier; the CLI accepts either the
/// number or the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Minimalistic,
    Colourful,
    Professional,
    Dark,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Minimalistic,
        Template::Colourful,
        Template::Professional,
        Template::Dark,
    ];

    /// Numeric identifier sent on the wire
    #[must_use]
    pub fn id(&self) -> u8 {
        match self {
            Template::Minimalistic => 1,
            Template::Colourful => 2,
            Template::Professional => 3,
            Template::Dark => 4,
        }
    }

    /// Catalog name as the backend spells it
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Template::Minimalistic => "minimalistic",
            Template::Colourful => "colourful",
            Template::Professional => "professional",
            Template::Dark => "dark",
        }
    }

    /// Look up a template by its numeric identifier
    #[must_use]
    pub fn from_id(id: u8) -> Option<Template> {
        Template::ALL.iter().copied().find(|t| t.id() == id)
    }
}

impl Default for Template {
    fn default() -> Self {
        Template::Minimalistic
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Template {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if let Ok(id) = normalized.parse::<u8>() {
            return Template::from_id(id).ok_or_else(|| {
                ClientError::invalid_input(format!("Unknown template id: {} (expected 1-4)", id))
            });
        }
        Template::ALL
            .iter()
            .copied()
            .find(|t| t.name() == normalized)
            .ok_or_else(|| {
                ClientError::invalid_input(format!(
                    "Unknown template: {} (expected minimalistic, colourful, professional, dark or 1-4)",
                    s
                ))
            })
    }
}
