//! Escalation Chain — deterministic chain-of-responsibility routing
//!
//! Routes a request along a fixed sequence of handlers until one has the
//! capability to accept it. This is a pure data-model walk with no I/O —
//! all decisions are deterministic and the chain is immutable once built.
//!
//! # Escalation ladder
//!
//! ```text
//! Request (level L)
//!     │
//!     ▼
//! Handler #1 (capability C1)
//!     ├─ C1 >= L → accepted, traversal stops
//!     │
//!     ▼
//! Handler #2 (capability C2)
//!     ├─ C2 >= L → accepted, traversal stops
//!     │
//!     ▼
//! ... last handler below L and no successor → Unhandled
//! ```
//!
//! `Unhandled` is a normal terminal outcome, not an error: the chain reports
//! it and leaves the response to the caller.

pub mod chain;
pub mod config;
pub mod handler;
pub mod trace;

pub use chain::{EscalationChain, Outcome, Submission};
pub use config::{ChainConfig, ChainConfigError, HandlerSpec};
pub use handler::{Handler, Request};
pub use trace::{DecisionTrace, StepVerdict, TraceStep};
