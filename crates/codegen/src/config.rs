//! Translator configuration
//!
//! Three independent switches fixed at translator construction.

use serde::{Deserialize, Serialize};

/// Output settings shared by every translator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Prefix each table statement with a descriptive comment
    pub comments: bool,

    /// Lay each table definition out on a single line
    pub one_line: bool,

    /// Derive `CREATE INDEX` statements from model relations
    pub auto_indexes: bool,
}

impl TranslatorConfig {
    /// Create a configuration with every switch off
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable header comments
    pub fn with_comments(mut self, enabled: bool) -> Self {
        self.comments = enabled;
        self
    }

    /// Enable or disable single-line table layout
    pub fn with_one_line(mut self, enabled: bool) -> Self {
        self.one_line = enabled;
        self
    }

    /// Enable or disable index derivation
    pub fn with_auto_indexes(mut self, enabled: bool) -> Self {
        self.auto_indexes = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_off() {
        let config = TranslatorConfig::default();
        assert!(!config.comments);
        assert!(!config.one_line);
        assert!(!config.auto_indexes);
    }

    #[test]
    fn test_builder() {
        let config = TranslatorConfig::new()
            .with_one_line(true)
            .with_auto_indexes(true);
        assert!(!config.comments);
        assert!(config.one_line);
        assert!(config.auto_indexes);
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: TranslatorConfig = serde_json::from_str(r#"{"comments": true}"#).unwrap();
        assert_eq!(config, TranslatorConfig::new().with_comments(true));
    }
}
