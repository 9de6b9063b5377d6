use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CatalogItem, PreferenceProfile};

/// Request to generate looks from a fresh catalog snapshot
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateLooksRequest {
    pub profile: PreferenceProfile,
    /// Callers cap catalog size at the boundary; the engine has no timeout
    #[validate(length(max = 5000))]
    #[serde(default)]
    pub catalog: Vec<CatalogItem>,
    #[serde(alias = "exclude_ids", rename = "excludeIds", default)]
    pub exclude_ids: Vec<String>,
}

/// Request to regenerate looks, excluding everything already shown
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegenerateLooksRequest {
    pub profile: PreferenceProfile,
    #[validate(length(max = 5000))]
    #[serde(default)]
    pub catalog: Vec<CatalogItem>,
    #[serde(
        alias = "previously_shown_ids",
        rename = "previouslyShownIds",
        default
    )]
    pub previously_shown_ids: Vec<String>,
}
