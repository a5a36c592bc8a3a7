//! Chain definition files
//!
//! A chain can be described in TOML and loaded at startup:
//!
//! ```toml
//! [[handlers]]
//! name = "Minsu"
//! role = "part-timer"
//! capability = 10
//!
//! [[handlers]]
//! name = "Sujin"
//! role = "shift manager"
//! capability = 100
//! ```
//!
//! Handler order in the file is chain order. Validation rejects empty and
//! duplicate identities — a duplicate would make `HandledBy` ambiguous.
//! There is no cycle check: the list representation cannot express one.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::escalation::chain::EscalationChain;
use crate::escalation::handler::Handler;

/// Errors raised while loading a chain definition
#[derive(Debug, thiserror::Error)]
pub enum ChainConfigError {
    #[error("failed to read chain definition {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse chain definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("handler at position {position} has an empty name")]
    EmptyName { position: usize },

    #[error("duplicate handler identity: {name}")]
    DuplicateName { name: String },
}

/// One `[[handlers]]` table in a definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub capability: u32,
}

/// A parsed chain definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default)]
    pub handlers: Vec<HandlerSpec>,
}

impl ChainConfig {
    /// Parse a definition from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ChainConfigError> {
        let config: ChainConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a definition file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChainConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ChainConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        debug!(
            path = %path.display(),
            handlers = config.handlers.len(),
            "loaded chain definition"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ChainConfigError> {
        let mut seen = HashSet::new();
        for (position, spec) in self.handlers.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(ChainConfigError::EmptyName { position });
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(ChainConfigError::DuplicateName {
                    name: spec.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Wire the described handlers into a chain, preserving file order.
    pub fn into_chain(self) -> EscalationChain {
        let mut chain = EscalationChain::new();
        for spec in self.handlers {
            let mut handler = Handler::new(spec.name, spec.capability);
            if let Some(role) = spec.role {
                handler = handler.with_role(role);
            }
            chain.push(handler);
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escalation::chain::Outcome;
    use crate::escalation::handler::Request;

    const STAFFING: &str = r#"
[[handlers]]
name = "Minsu"
role = "part-timer"
capability = 10

[[handlers]]
name = "Sujin"
role = "shift manager"
capability = 100

[[handlers]]
name = "Johan"
role = "store owner"
capability = 1000
"#;

    #[test]
    fn parses_handlers_in_file_order() {
        let config = ChainConfig::from_toml(STAFFING).unwrap();
        let chain = config.into_chain();
        let names: Vec<&str> = chain.handlers().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Minsu", "Sujin", "Johan"]);
        assert_eq!(chain.max_capability(), Some(1000));
    }

    #[test]
    fn loaded_chain_routes_like_a_programmatic_one() {
        let chain = ChainConfig::from_toml(STAFFING).unwrap().into_chain();
        let outcome = chain.submit(&Request::new("bulk catering order", 90));
        assert_eq!(
            outcome,
            Outcome::HandledBy {
                handler: "Sujin".to_string()
            }
        );
    }

    #[test]
    fn empty_definition_builds_an_empty_chain() {
        let config = ChainConfig::from_toml("").unwrap();
        assert!(config.into_chain().is_empty());
    }

    #[test]
    fn rejects_empty_handler_name() {
        let text = "[[handlers]]\nname = \"  \"\ncapability = 10\n";
        let err = ChainConfig::from_toml(text).unwrap_err();
        assert!(matches!(err, ChainConfigError::EmptyName { position: 0 }));
    }

    #[test]
    fn rejects_duplicate_identity() {
        let text = r#"
[[handlers]]
name = "Minsu"
capability = 10

[[handlers]]
name = "Minsu"
capability = 100
"#;
        let err = ChainConfig::from_toml(text).unwrap_err();
        match err {
            ChainConfigError::DuplicateName { name } => assert_eq!(name, "Minsu"),
            other => panic!("expected DuplicateName, got: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ChainConfig::from_toml("[[handlers]]\nname = ").unwrap_err();
        assert!(matches!(err, ChainConfigError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let err = ChainConfig::load("/nonexistent/chain.toml").unwrap_err();
        match err {
            ChainConfigError::Read { path, .. } => assert!(path.contains("chain.toml")),
            other => panic!("expected Read, got: {other:?}"),
        }
    }
}
