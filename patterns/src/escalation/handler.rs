//! Handler and Request — the escalation chain data model

use serde::{Deserialize, Serialize};

/// A node in the escalation chain.
///
/// Handlers are created once and wired into an ordered sequence before any
/// request is processed; the sequence never changes afterwards. The `role`
/// label replaces the behavior-free subclass tiers of textbook renditions —
/// every handler does the same thing, only identity and threshold differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handler {
    /// Identity reported in `Outcome::HandledBy`
    pub name: String,
    /// Optional tier label, e.g. "part-timer" or "store owner"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Capability threshold — accepts any request level up to and including this
    pub capability: u32,
}

impl Handler {
    /// Create a handler with no role label
    pub fn new(name: impl Into<String>, capability: u32) -> Self {
        Self {
            name: name.into(),
            role: None,
            capability,
        }
    }

    /// Attach a tier label
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Whether this handler can accept a request of the given level.
    /// The comparison is inclusive: an exact threshold match accepts.
    pub fn can_handle(&self, level: u32) -> bool {
        self.capability >= level
    }
}

impl std::fmt::Display for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.role {
            Some(role) => write!(f, "{} ({}, capability {})", self.name, role, self.capability),
            None => write!(f, "{} (capability {})", self.name, self.capability),
        }
    }
}

/// An immutable request submitted to the chain.
///
/// Created once per submission and discarded after processing; the chain
/// never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Required capability level
    pub level: u32,
    /// Descriptive content, used only for narration
    pub content: String,
}

impl Request {
    pub fn new(content: impl Into<String>, level: u32) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" (level {})", self.content, self.level)
    }
}
