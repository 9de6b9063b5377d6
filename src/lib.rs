//! Attire Algo - Outfit recommendation service for the Attire shopping app
//!
//! This library provides the look recommendation engine used by the Attire
//! shopping app. It implements a scored, budget-aware assembly pipeline that
//! bundles catalog items into complete, purchasable outfits.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{LookAssembler, RegenerationResult, LOOKS_PER_CALL};
pub use models::{
    CatalogItem, Category, Gender, Look, LookItem, PreferenceProfile, Purpose, ScoringConfig,
    ScoringWeights, DEFAULT_BUDGET,
};
