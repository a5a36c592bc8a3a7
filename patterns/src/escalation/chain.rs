//! EscalationChain — ordered handler traversal
//!
//! The chain holds its handlers as an ordered list rather than as linked
//! successor pointers; forwarding is an index increment, and a cyclic chain
//! is unrepresentable. Traversal is strictly forward: no handler is visited
//! twice and there is no backtracking.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::escalation::handler::{Handler, Request};
use crate::escalation::trace::{DecisionTrace, StepVerdict, TraceStep};

/// Terminal result of processing a request.
///
/// `Unhandled` is a normal outcome, not a fault — a request nobody in the
/// chain can satisfy resolves to it synchronously, with no retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Accepted by the named handler; no later handler was consulted
    HandledBy { handler: String },
    /// Every handler's threshold was below the request level
    Unhandled,
}

impl Outcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::HandledBy { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HandledBy { handler } => write!(f, "handled by {}", handler),
            Self::Unhandled => write!(f, "unhandled"),
        }
    }
}

/// Outcome plus the decision path that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub outcome: Outcome,
    pub trace: DecisionTrace,
}

/// A fixed, ordered sequence of handlers.
///
/// Built once, then read-only: `submit` takes `&self` and keeps no state
/// between calls, so concurrent submissions need no coordination and
/// resubmitting the same request always yields the same outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EscalationChain {
    handlers: Vec<Handler>,
}

impl EscalationChain {
    /// An empty chain. Every submission against it is `Unhandled`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain from `(identity, capability)` pairs in chain order.
    pub fn from_pairs<S, I>(pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, u32)>,
    {
        Self {
            handlers: pairs
                .into_iter()
                .map(|(name, capability)| Handler::new(name, capability))
                .collect(),
        }
    }

    /// Append a handler at the tail of the chain.
    pub fn push(&mut self, handler: Handler) -> &mut Self {
        self.handlers.push(handler);
        self
    }

    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Highest threshold present in the chain, if any.
    /// Requests above it are guaranteed `Unhandled`.
    pub fn max_capability(&self) -> Option<u32> {
        self.handlers.iter().map(|h| h.capability).max()
    }

    /// Walk the chain and return the terminal outcome.
    ///
    /// The first handler in chain order whose threshold is at or above the
    /// request level accepts; handlers after it are never consulted.
    pub fn submit(&self, request: &Request) -> Outcome {
        for handler in &self.handlers {
            if handler.can_handle(request.level) {
                debug!(handler = %handler.name, level = request.level, "request accepted");
                return Outcome::HandledBy {
                    handler: handler.name.clone(),
                };
            }
            debug!(
                handler = %handler.name,
                capability = handler.capability,
                level = request.level,
                "request forwarded"
            );
        }
        debug!(level = request.level, "chain exhausted");
        Outcome::Unhandled
    }

    /// Walk the chain and return the outcome together with the decision path.
    pub fn submit_traced(&self, request: &Request) -> Submission {
        let mut steps = Vec::new();
        let mut outcome = Outcome::Unhandled;

        for (index, handler) in self.handlers.iter().enumerate() {
            if handler.can_handle(request.level) {
                steps.push(TraceStep::new(handler, StepVerdict::Accepted));
                outcome = Outcome::HandledBy {
                    handler: handler.name.clone(),
                };
                break;
            }
            let verdict = if index + 1 < self.handlers.len() {
                StepVerdict::Forwarded
            } else {
                StepVerdict::Exhausted
            };
            steps.push(TraceStep::new(handler, verdict));
        }

        let trace = DecisionTrace {
            submission_id: Uuid::new_v4().to_string(),
            submitted_at: Utc::now(),
            request_level: request.level,
            request_content: request.content.clone(),
            steps,
            outcome: outcome.clone(),
        };

        Submission { outcome, trace }
    }
}
