use serde::{Deserialize, Serialize};

use crate::models::domain::Look;

/// Response for the generate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateLooksResponse {
    #[serde(rename = "requestId")]
    pub request_id: uuid::Uuid,
    pub looks: Vec<Look>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Response for the regenerate endpoint; `pool_reset` reports the
/// exhaustion-retry so the contract stays observable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegenerateLooksResponse {
    #[serde(rename = "requestId")]
    pub request_id: uuid::Uuid,
    pub looks: Vec<Look>,
    #[serde(rename = "excludedIds")]
    pub excluded_ids: Vec<String>,
    #[serde(rename = "poolReset")]
    pub pool_reset: bool,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
