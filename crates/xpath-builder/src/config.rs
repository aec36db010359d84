//! Builder configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::result::{XPathError, XPathResult};

/// How `back()` locates the segment it removes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalStrategy {
    /// Remove the last pattern match at the offset where it matched
    #[default]
    MatchPosition,
    /// Remove the last plain-text occurrence of the matched segment.
    ///
    /// Kept for compatibility with older path tooling. A match only holds
    /// `/` at its start, so any later copy of its text would be a later
    /// match; on builder output this always removes the same range as
    /// [`MatchPosition`](Self::MatchPosition).
    LastOccurrence,
}

impl RemovalStrategy {
    /// Configuration name of the strategy
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MatchPosition => "match_position",
            Self::LastOccurrence => "last_occurrence",
        }
    }
}

impl fmt::Display for RemovalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemovalStrategy {
    type Err = XPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "match_position" => Ok(Self::MatchPosition),
            "last_occurrence" => Ok(Self::LastOccurrence),
            other => Err(XPathError::Config {
                message: format!("unknown removal strategy '{other}'"),
            }),
        }
    }
}

/// Configuration shared by a builder and every builder it spawns for root composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Segment lookup used by `back()`/`up()`
    pub removal_strategy: RemovalStrategy,
    /// Emit `tracing` events for builder operations
    pub trace_operations: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            removal_strategy: RemovalStrategy::MatchPosition,
            trace_operations: true,
        }
    }
}

impl BuilderConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set removal strategy
    #[must_use]
    pub const fn with_removal_strategy(mut self, strategy: RemovalStrategy) -> Self {
        self.removal_strategy = strategy;
        self
    }

    /// Enable or disable operation tracing
    #[must_use]
    pub const fn with_trace_operations(mut self, enabled: bool) -> Self {
        self.trace_operations = enabled;
        self
    }

    /// Parse configuration from a JSON document
    pub fn from_json(document: &str) -> XPathResult<Self> {
        serde_json::from_str(document).map_err(|e| XPathError::Config {
            message: e.to_string(),
        })
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(document: &str) -> XPathResult<Self> {
        serde_yaml_ng::from_str(document).map_err(|e| XPathError::Config {
            message: e.to_string(),
        })
    }

    /// Serialize configuration to pretty JSON
    pub fn to_json(&self) -> XPathResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h0_config_01_defaults() {
        let config = BuilderConfig::new();
        assert_eq!(config.removal_strategy, RemovalStrategy::MatchPosition);
        assert!(config.trace_operations);
    }

    #[test]
    fn h0_config_02_setters() {
        let config = BuilderConfig::new()
            .with_removal_strategy(RemovalStrategy::LastOccurrence)
            .with_trace_operations(false);
        assert_eq!(config.removal_strategy, RemovalStrategy::LastOccurrence);
        assert!(!config.trace_operations);
    }

    #[test]
    fn h0_config_03_from_json() {
        let config = BuilderConfig::from_json(r#"{"removal_strategy": "last_occurrence"}"#).unwrap();
        assert_eq!(config.removal_strategy, RemovalStrategy::LastOccurrence);
        assert!(config.trace_operations);
    }

    #[test]
    fn h0_config_04_from_yaml() {
        let config = BuilderConfig::from_yaml("trace_operations: false\n").unwrap();
        assert_eq!(config.removal_strategy, RemovalStrategy::MatchPosition);
        assert!(!config.trace_operations);
    }

    #[test]
    fn h0_config_05_invalid_documents() {
        let err = BuilderConfig::from_json(r#"{"removal_strategy": "nearest"}"#).unwrap_err();
        assert!(
            matches!(err, XPathError::Config { ref message } if message.contains("nearest")),
            "{err:?}"
        );
        assert!(matches!(
            BuilderConfig::from_yaml("removal_strategy: [1, 2]"),
            Err(XPathError::Config { .. })
        ));
        assert!(matches!(
            BuilderConfig::from_json("{"),
            Err(XPathError::Config { .. })
        ));
    }

    #[test]
    fn h0_config_06_json_roundtrip() {
        let config = BuilderConfig::new().with_removal_strategy(RemovalStrategy::LastOccurrence);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"last_occurrence\""));
        assert_eq!(BuilderConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn h0_config_07_strategy_from_str() {
        assert_eq!(
            "match_position".parse::<RemovalStrategy>().unwrap(),
            RemovalStrategy::MatchPosition
        );
        assert_eq!(
            RemovalStrategy::LastOccurrence.to_string(),
            "last_occurrence"
        );
        let err = "nearest".parse::<RemovalStrategy>().unwrap_err();
        assert!(matches!(err, XPathError::Config { .. }));
    }
}
