// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CatalogItem, Category, Gender, Look, LookItem, PreferenceProfile, Purpose, ScoringConfig,
    ScoringWeights, Sizes, DEFAULT_BUDGET, PLACEHOLDER_IMAGE_URL,
};
pub use requests::{GenerateLooksRequest, RegenerateLooksRequest};
pub use responses::{
    ErrorResponse, GenerateLooksResponse, HealthResponse, RegenerateLooksResponse,
};
