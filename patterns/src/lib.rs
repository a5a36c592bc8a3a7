//! Design pattern catalog
//!
//! This library holds a set of independent, self-contained demonstrations of
//! classical design patterns, plus the escalation chain they orbit:
//!
//! - [`escalation`] — a deterministic chain-of-responsibility component:
//!   ordered handlers with capability thresholds, traced traversal, and
//!   TOML chain definitions. Built once, read-only afterwards, no I/O.
//! - [`demos`] — one module per pattern, each a pure function returning its
//!   console narration, registered in a catalog the CLI dispatches through.
//!
//! # Usage
//!
//! ```rust
//! use patterns::escalation::{EscalationChain, Outcome, Request};
//!
//! let chain = EscalationChain::from_pairs([("A", 10), ("B", 100), ("C", 1000)]);
//! let outcome = chain.submit(&Request::new("bulk catering order", 90));
//! assert_eq!(outcome, Outcome::HandledBy { handler: "B".to_string() });
//! ```
//!
//! ```bash
//! # List and run demonstrations
//! patterns list
//! patterns run escalation-chain
//! patterns run --all
//!
//! # Submit one request against a chain definition
//! patterns submit --level 90 --content "bulk catering order" --config chain.toml
//! ```

pub mod demos;
pub mod escalation;

// Re-export key escalation types
pub use escalation::{
    ChainConfig, ChainConfigError, DecisionTrace, EscalationChain, Handler, Outcome, Request,
    StepVerdict, Submission, TraceStep,
};

// Re-export catalog types
pub use demos::{Category, DemoEntry, DemoError};
