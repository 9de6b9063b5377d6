use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    #[serde(default = "default_looks_per_call")]
    pub looks_per_call: usize,
    #[serde(default = "default_budget")]
    pub default_budget: f64,
    /// Fixed jitter seed; leave unset in production for entropy seeding
    #[serde(default)]
    pub jitter_seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            looks_per_call: default_looks_per_call(),
            default_budget: default_budget(),
            jitter_seed: None,
        }
    }
}

fn default_looks_per_call() -> usize {
    crate::core::LOOKS_PER_CALL
}

fn default_budget() -> f64 {
    crate::models::DEFAULT_BUDGET
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_style_match")]
    pub style_match: f64,
    #[serde(default = "default_occasion_match")]
    pub occasion_match: f64,
    #[serde(default = "default_color_harmony")]
    pub color_harmony: f64,
    #[serde(default = "default_color_novelty")]
    pub color_novelty: f64,
    #[serde(default = "default_size_fit")]
    pub size_fit: f64,
    #[serde(default = "default_brand_novelty")]
    pub brand_novelty: f64,
    #[serde(default = "default_subcategory_novelty")]
    pub subcategory_novelty: f64,
    #[serde(default = "default_gift_suitable")]
    pub gift_suitable: f64,
    #[serde(default = "default_premium_brand")]
    pub premium_brand: f64,
    #[serde(default = "default_featured")]
    pub featured: f64,
    #[serde(default = "default_sweet_spot")]
    pub sweet_spot: f64,
    #[serde(default = "default_premium_pick")]
    pub premium_pick: f64,
    #[serde(default = "default_jitter")]
    pub jitter: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            style_match: default_style_match(),
            occasion_match: default_occasion_match(),
            color_harmony: default_color_harmony(),
            color_novelty: default_color_novelty(),
            size_fit: default_size_fit(),
            brand_novelty: default_brand_novelty(),
            subcategory_novelty: default_subcategory_novelty(),
            gift_suitable: default_gift_suitable(),
            premium_brand: default_premium_brand(),
            featured: default_featured(),
            sweet_spot: default_sweet_spot(),
            premium_pick: default_premium_pick(),
            jitter: default_jitter(),
        }
    }
}

fn default_style_match() -> f64 { 30.0 }
fn default_occasion_match() -> f64 { 25.0 }
fn default_color_harmony() -> f64 { 15.0 }
fn default_color_novelty() -> f64 { 5.0 }
fn default_size_fit() -> f64 { 20.0 }
fn default_brand_novelty() -> f64 { 8.0 }
fn default_subcategory_novelty() -> f64 { 8.0 }
fn default_gift_suitable() -> f64 { 12.0 }
fn default_premium_brand() -> f64 { 6.0 }
fn default_featured() -> f64 { 10.0 }
fn default_sweet_spot() -> f64 { 10.0 }
fn default_premium_pick() -> f64 { 4.0 }
fn default_jitter() -> f64 { 2.0 }

impl WeightsConfig {
    pub fn to_weights(&self) -> crate::models::ScoringWeights {
        crate::models::ScoringWeights {
            style_match: self.style_match,
            occasion_match: self.occasion_match,
            color_harmony: self.color_harmony,
            color_novelty: self.color_novelty,
            size_fit: self.size_fit,
            brand_novelty: self.brand_novelty,
            subcategory_novelty: self.subcategory_novelty,
            gift_suitable: self.gift_suitable,
            premium_brand: self.premium_brand,
            featured: self.featured,
            sweet_spot: self.sweet_spot,
            premium_pick: self.premium_pick,
            jitter: self.jitter,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with ATTIRE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ATTIRE_)
            // e.g., ATTIRE_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ATTIRE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ATTIRE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.style_match, 30.0);
        assert_eq!(weights.occasion_match, 25.0);
        assert_eq!(weights.size_fit, 20.0);
        assert_eq!(weights.jitter, 2.0);
    }

    #[test]
    fn test_default_engine_settings() {
        let engine = EngineSettings::default();
        assert_eq!(engine.looks_per_call, 5);
        assert_eq!(engine.default_budget, 5000.0);
        assert!(engine.jitter_seed.is_none());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
