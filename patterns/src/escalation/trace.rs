//! Decision traces — the textual record of a chain traversal
//!
//! A trace records which handlers inspected a request and what each decided.
//! It is demonstration/logging output, not a stable machine format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::escalation::chain::Outcome;
use crate::escalation::handler::Handler;

/// What a single handler decided when it inspected the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepVerdict {
    /// Threshold sufficient — handler accepted, traversal stopped
    Accepted,
    /// Threshold insufficient — request forwarded to the successor
    Forwarded,
    /// Threshold insufficient and no successor — chain exhausted
    Exhausted,
}

impl std::fmt::Display for StepVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Forwarded => write!(f, "forwarded"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// One handler's inspection of the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Handler identity
    pub handler: String,
    /// Tier label, when the handler carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// The handler's capability threshold
    pub capability: u32,
    /// What the handler decided
    pub verdict: StepVerdict,
}

impl TraceStep {
    pub(crate) fn new(handler: &Handler, verdict: StepVerdict) -> Self {
        Self {
            handler: handler.name.clone(),
            role: handler.role.clone(),
            capability: handler.capability,
            verdict,
        }
    }
}

/// Full decision path for one submission.
///
/// Steps appear in chain order; each handler appears at most once and the
/// last step is either an acceptance or the exhaustion of the chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTrace {
    /// Unique id for this submission
    pub submission_id: String,
    /// When the request was submitted
    pub submitted_at: DateTime<Utc>,
    /// The request's required capability level
    pub request_level: u32,
    /// The request's descriptive content
    pub request_content: String,
    /// Handlers that inspected the request, in chain order
    pub steps: Vec<TraceStep>,
    /// Terminal outcome
    pub outcome: Outcome,
}

impl DecisionTrace {
    /// Number of handlers that inspected the request
    pub fn handlers_consulted(&self) -> usize {
        self.steps.len()
    }
}

impl std::fmt::Display for DecisionTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "request \"{}\" (level {})",
            self.request_content, self.request_level
        )?;
        for step in &self.steps {
            let who = match &step.role {
                Some(role) => format!("{} ({})", step.handler, role),
                None => step.handler.clone(),
            };
            match step.verdict {
                StepVerdict::Accepted => {
                    writeln!(f, "  {} [capability {}] -> accepted", who, step.capability)?
                }
                StepVerdict::Forwarded => writeln!(
                    f,
                    "  {} [capability {}] -> passed up the chain",
                    who, step.capability
                )?,
                StepVerdict::Exhausted => writeln!(
                    f,
                    "  {} [capability {}] -> nobody above to ask",
                    who, step.capability
                )?,
            }
        }
        write!(f, "outcome: {}", self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trace() -> DecisionTrace {
        DecisionTrace {
            submission_id: "test".to_string(),
            submitted_at: Utc::now(),
            request_level: 90,
            request_content: "bulk catering order".to_string(),
            steps: vec![
                TraceStep::new(
                    &Handler::new("Minsu", 10).with_role("part-timer"),
                    StepVerdict::Forwarded,
                ),
                TraceStep::new(&Handler::new("Sujin", 100), StepVerdict::Accepted),
            ],
            outcome: Outcome::HandledBy {
                handler: "Sujin".to_string(),
            },
        }
    }

    #[test]
    fn display_renders_one_line_per_step_plus_outcome() {
        let rendered = sample_trace().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Minsu (part-timer)"));
        assert!(lines[1].contains("passed up the chain"));
        assert!(lines[2].contains("accepted"));
        assert!(lines[3].starts_with("outcome:"));
    }

    #[test]
    fn trace_serializes_with_snake_case_verdicts() {
        let json = serde_json::to_string(&sample_trace()).unwrap();
        assert!(json.contains("\"forwarded\""), "JSON: {json}");
        assert!(json.contains("\"accepted\""), "JSON: {json}");
    }
}
