//! Catalog and engine configuration for the outreach engine
//!
//! Supports loading configuration from:
//! - YAML/JSON/TOML files
//! - Environment variables (OUTREACH_ prefix)
//! - Runtime overrides
//!
//! The shipped defaults carry the fixed recommendation catalogs:
//! - Disposition catalog and per-disposition follow-up rules
//! - Notes keyword sets (positive, negative, urgency, decision)
//! - Tag groups (high-value, industry, pipeline)
//! - Output limits (cap, no-action sentinel)

pub mod catalog;
pub mod engine;

pub use catalog::{
    DispositionCatalog, DispositionRules, EngineLimits, KeywordSet, NotesKeywords, TagGroup,
    TagGroups,
};
pub use engine::{
    engine_config, init_engine_config, load_engine_config, EngineConfig, EngineConfigManager,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
