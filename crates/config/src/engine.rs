//! Engine configuration loader
//!
//! Unified interface for loading and accessing the recommendation catalogs.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::catalog::{DispositionCatalog, DispositionRules, EngineLimits, NotesKeywords, TagGroups};
use crate::ConfigError;

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Config schema version
    #[serde(default = "default_version")]
    pub version: String,

    /// Disposition catalog
    #[serde(default)]
    pub dispositions: DispositionCatalog,

    /// Per-disposition follow-up rules
    #[serde(default)]
    pub disposition_rules: DispositionRules,

    /// Notes keyword sets
    #[serde(default)]
    pub notes_keywords: NotesKeywords,

    /// Tag groups
    #[serde(default)]
    pub tag_groups: TagGroups,

    /// Output limits
    #[serde(default)]
    pub limits: EngineLimits,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            dispositions: DispositionCatalog::default(),
            disposition_rules: DispositionRules::default(),
            notes_keywords: NotesKeywords::default(),
            tag_groups: TagGroups::default(),
            limits: EngineLimits::default(),
        }
    }
}

impl EngineConfig {
    /// Create new engine config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load from JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load from TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.limits.max_recommendations == 0 {
            errors.push("max_recommendations must be at least 1".to_string());
        }
        if self.limits.no_action_label.is_empty() {
            errors.push("no_action_label must not be empty".to_string());
        }

        for (name, set) in self.notes_keywords.sets() {
            if set.keywords.is_empty() {
                errors.push(format!("keyword set '{name}' has no keywords"));
            }
            if set.recommendations.is_empty() {
                errors.push(format!("keyword set '{name}' has no recommendations"));
            }
        }

        for (name, group) in self.tag_groups.groups() {
            if group.tags.is_empty() {
                errors.push(format!("tag group '{name}' has no tags"));
            }
            if group.recommendation.is_empty() {
                errors.push(format!("tag group '{name}' has no recommendation"));
            }
        }

        for disposition in &self.dispositions.dispositions {
            if disposition.id.is_empty() {
                errors.push("disposition with empty id".to_string());
            }
            let count = self
                .dispositions
                .dispositions
                .iter()
                .filter(|d| d.id == disposition.id)
                .count();
            if count > 1 {
                let message = format!("duplicate disposition id '{}'", disposition.id);
                if !errors.contains(&message) {
                    errors.push(message);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Merge with another config (other takes precedence for non-default
    /// sections)
    pub fn merge(&mut self, other: &EngineConfig) {
        let defaults = EngineConfig::default();

        if other.version != defaults.version {
            self.version = other.version.clone();
        }
        if other.dispositions != defaults.dispositions {
            self.dispositions = other.dispositions.clone();
        }
        if other.disposition_rules != defaults.disposition_rules {
            self.disposition_rules = other.disposition_rules.clone();
        }
        if other.notes_keywords != defaults.notes_keywords {
            self.notes_keywords = other.notes_keywords.clone();
        }
        if other.tag_groups != defaults.tag_groups {
            self.tag_groups = other.tag_groups.clone();
        }
        if other.limits != defaults.limits {
            self.limits = other.limits.clone();
        }
    }
}

/// Layered load: an optional file, then OUTREACH_* environment overrides.
/// Missing sections fall back to the shipped defaults.
pub fn load_engine_config(path: Option<&str>) -> Result<EngineConfig, ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::with_name(path));
    }
    let settings = builder
        .add_source(config::Environment::with_prefix("OUTREACH").separator("__"))
        .build()?;

    let engine_config: EngineConfig = settings.try_deserialize()?;
    Ok(engine_config)
}

/// Engine configuration manager with reload support
pub struct EngineConfigManager {
    /// Current configuration
    config: Arc<RwLock<EngineConfig>>,
    /// Config file path (if loaded from file)
    config_path: Option<String>,
}

impl EngineConfigManager {
    /// Create new manager with default config
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(EngineConfig::default())),
            config_path: None,
        }
    }

    /// Create manager with config
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            config_path: None,
        }
    }

    /// Load from file, dispatching on the extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let config = load_by_extension(path.as_ref())?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path: Some(path_str),
        })
    }

    /// Reload configuration from file
    pub fn reload(&self) -> Result<(), ConfigError> {
        let path = self
            .config_path
            .as_ref()
            .ok_or_else(|| ConfigError::FileNotFound("No config path set".to_string()))?;

        let new_config = load_by_extension(Path::new(path))?;
        *self.config.write() = new_config;
        Ok(())
    }

    /// Get current configuration
    pub fn get(&self) -> EngineConfig {
        self.config.read().clone()
    }

    /// Get configuration reference
    pub fn config(&self) -> Arc<RwLock<EngineConfig>> {
        Arc::clone(&self.config)
    }

    /// Update configuration
    pub fn update(&self, config: EngineConfig) {
        *self.config.write() = config;
    }

    /// Get disposition catalog
    pub fn dispositions(&self) -> DispositionCatalog {
        self.config.read().dispositions.clone()
    }

    /// Get per-disposition rules
    pub fn disposition_rules(&self) -> DispositionRules {
        self.config.read().disposition_rules.clone()
    }

    /// Get notes keyword sets
    pub fn notes_keywords(&self) -> NotesKeywords {
        self.config.read().notes_keywords.clone()
    }

    /// Get tag groups
    pub fn tag_groups(&self) -> TagGroups {
        self.config.read().tag_groups.clone()
    }

    /// Get output limits
    pub fn limits(&self) -> EngineLimits {
        self.config.read().limits.clone()
    }

    /// Get the recommendation cap
    pub fn max_recommendations(&self) -> usize {
        self.config.read().limits.max_recommendations
    }

    /// Display name for a disposition id
    pub fn disposition_name(&self, id: &str) -> Option<String> {
        self.config
            .read()
            .dispositions
            .display_name(id)
            .map(str::to_string)
    }
}

impl Default for EngineConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn load_by_extension(path: &Path) -> Result<EngineConfig, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => EngineConfig::from_yaml_file(path),
        Some("toml") => EngineConfig::from_toml_file(path),
        _ => EngineConfig::from_json_file(path),
    }
}

/// Global engine configuration instance
static ENGINE_CONFIG: once_cell::sync::Lazy<EngineConfigManager> =
    once_cell::sync::Lazy::new(EngineConfigManager::new);

/// Get global engine configuration
pub fn engine_config() -> &'static EngineConfigManager {
    &ENGINE_CONFIG
}

/// Initialize global engine configuration from file. Validation issues are
/// logged, not fatal; the engine stays usable with whatever loaded.
pub fn init_engine_config(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let manager = EngineConfigManager::from_file(path)?;
    let config = manager.get();
    if let Err(errors) = config.validate() {
        for error in &errors {
            tracing::warn!(error = %error, "engine config validation issue");
        }
    }
    ENGINE_CONFIG.update(config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_validates() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.limits.max_recommendations, 3);
    }

    #[test]
    fn test_validation_catches_bad_limits() {
        let mut config = EngineConfig::default();
        config.limits.max_recommendations = 0;
        config.limits.no_action_label = String::new();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_validation_catches_empty_keyword_set() {
        let mut config = EngineConfig::default();
        config.notes_keywords.urgency.keywords.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        let yaml = serde_yaml::to_string(&EngineConfig::default()).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let loaded = EngineConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(loaded, EngineConfig::default());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        file.write_all(b"limits:\n  max_recommendations: 5\n")
            .unwrap();

        let loaded = EngineConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(loaded.limits.max_recommendations, 5);
        assert_eq!(loaded.limits.no_action_label, "No follow-up needed");
        assert_eq!(loaded.tag_groups, TagGroups::default());
    }

    #[test]
    fn test_missing_file_error() {
        let err = EngineConfig::from_yaml_file("/nonexistent/engine.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_parse_error() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = EngineConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_manager_from_file_dispatches_on_extension() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        let json = serde_json::to_string(&EngineConfig::default()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let manager = EngineConfigManager::from_file(file.path()).unwrap();
        assert_eq!(manager.max_recommendations(), 3);
        assert_eq!(
            manager.disposition_name("interested").as_deref(),
            Some("Interested")
        );
    }

    #[test]
    fn test_merge_overlay_wins() {
        let mut base = EngineConfig::default();
        let mut overlay = EngineConfig::default();
        overlay.limits.max_recommendations = 5;
        overlay.version = "2.0.0".to_string();

        base.merge(&overlay);

        assert_eq!(base.limits.max_recommendations, 5);
        assert_eq!(base.version, "2.0.0");
        assert_eq!(base.notes_keywords, NotesKeywords::default());
    }

    #[test]
    fn test_layered_load_defaults_without_file() {
        let loaded = load_engine_config(None).unwrap();
        assert_eq!(loaded.limits.max_recommendations, 3);
    }
}
