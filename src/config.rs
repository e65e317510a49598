//! Configuration for tag taxonomies
//!
//! Configuration is read from a TOML file, usually `taxonomy.toml`:
//!
//! ```toml
//! [moves]
//! path_check = "rooted"
//!
//! [names]
//! fallback_locale = "en"
//! ```
//!
//! Every section and key is optional.

use std::fs;
use std::path::Path as FsPath;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{move_tag_checked, Path, PathCheck, Tag, TagError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings for moving tags
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MoveConfig {
    /// Validation applied to a new ancestor path
    pub path_check: PathCheck,
}

/// Settings for display names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NameConfig {
    /// Locale used when the requested one is missing
    pub fallback_locale: String,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            fallback_locale: "en".to_string(),
        }
    }
}

/// Taxonomy-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TaxonomyConfig {
    pub moves: MoveConfig,
    pub names: NameConfig,
}

impl TaxonomyConfig {
    /// Parses configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Loads configuration from a file, falling back to defaults if it is missing
    pub fn load(path: &FsPath) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no taxonomy config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read taxonomy config: {}", path.display()))?;

        Self::from_toml_str(&content).context("Failed to parse taxonomy config")
    }

    /// Serializes the configuration back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize taxonomy config")
    }

    /// Moves a leaf using the configured path check
    pub fn move_tag(&self, tag: &Tag, path: Path, snapshot: &[Tag]) -> Result<Tag, TagError> {
        move_tag_checked(tag, path, snapshot, self.moves.path_check)
    }

    /// Picks the display name for `tag` in `locale`
    pub fn display_name<'a>(&self, tag: &'a Tag, locale: &str) -> Option<&'a str> {
        tag.name.display(locale, &self.names.fallback_locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClassificationId, LocalizedValue, PathError, TagId, TagStatus};
    use tempfile::TempDir;

    fn make_tag() -> Tag {
        Tag {
            id: TagId::new(),
            classification_id: ClassificationId::from("cls-1"),
            name: LocalizedValue::from([("en", "Root"), ("it", "Radice")]),
            ancestors: Path::new(),
            status: TagStatus::Ready,
        }
    }

    #[test]
    fn default_config() {
        let config = TaxonomyConfig::default();

        assert_eq!(config.moves.path_check, PathCheck::NoSelfReference);
        assert_eq!(config.names.fallback_locale, "en");
    }

    #[test]
    fn parse_config() {
        let toml = r#"
[moves]
path_check = "rooted"

[names]
fallback_locale = "it"
"#;

        let config = TaxonomyConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.moves.path_check, PathCheck::Rooted);
        assert_eq!(config.names.fallback_locale, "it");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = TaxonomyConfig::from_toml_str("[moves]\npath_check = \"unchecked\"\n").unwrap();

        assert_eq!(config.moves.path_check, PathCheck::Unchecked);
        assert_eq!(config.names, NameConfig::default());
    }

    #[test]
    fn rejects_unknown_path_check() {
        let result = TaxonomyConfig::from_toml_str("[moves]\npath_check = \"strict\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = TaxonomyConfig::load(&dir.path().join("taxonomy.toml")).unwrap();

        assert_eq!(config, TaxonomyConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taxonomy.toml");

        let mut config = TaxonomyConfig::default();
        config.moves.path_check = PathCheck::Rooted;
        fs::write(&path, config.to_toml_string().unwrap()).unwrap();

        let loaded = TaxonomyConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taxonomy.toml");
        fs::write(&path, "moves = [").unwrap();

        let err = TaxonomyConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse taxonomy config"));
    }

    #[test]
    fn configured_move_applies_path_check() {
        let tag = make_tag();
        let path = Path::from(vec![tag.id]);

        let strict = TaxonomyConfig::default();
        assert_eq!(
            strict.move_tag(&tag, path.clone(), &[]),
            Err(TagError::Path(PathError::SelfReference(tag.id)))
        );

        let mut lax = TaxonomyConfig::default();
        lax.moves.path_check = PathCheck::Unchecked;
        assert!(lax.move_tag(&tag, path, &[]).is_ok());
    }

    #[test]
    fn display_name_uses_fallback() {
        let tag = make_tag();
        let config = TaxonomyConfig::default();

        assert_eq!(config.display_name(&tag, "it"), Some("Radice"));
        assert_eq!(config.display_name(&tag, "fr"), Some("Root"));
    }
}
