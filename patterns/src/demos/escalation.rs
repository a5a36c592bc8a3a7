//! Chain of Responsibility — requests escalate through coffee-shop staff
//!
//! A part-timer fields whatever they can; anything past their capability
//! climbs to the shift manager, then the store owner. A request nobody can
//! satisfy comes back `Unhandled` — the shop simply asks the customer to
//! come back later.

use crate::escalation::{EscalationChain, Handler, Request};

/// The built-in staffing chain used by the demonstration and as the CLI
/// default when no chain definition is supplied.
pub fn staffing_chain() -> EscalationChain {
    let mut chain = EscalationChain::new();
    chain
        .push(Handler::new("Minsu", 10).with_role("part-timer"))
        .push(Handler::new("Sujin", 100).with_role("shift manager"))
        .push(Handler::new("Johan", 1000).with_role("store owner"));
    chain
}

pub fn run() -> Vec<String> {
    let chain = staffing_chain();
    let requests = [
        Request::new("order pickup", 5),
        Request::new("bulk catering order", 90),
        Request::new("franchise inquiry", 999),
        Request::new("acquisition offer", 5000),
    ];

    let mut lines = Vec::new();
    for request in &requests {
        let submission = chain.submit_traced(request);
        lines.extend(submission.trace.to_string().lines().map(String::from));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escalation::Outcome;

    #[test]
    fn each_request_lands_on_the_expected_tier() {
        let chain = staffing_chain();

        let cases = [
            ("order pickup", 5, Some("Minsu")),
            ("bulk catering order", 90, Some("Sujin")),
            ("franchise inquiry", 999, Some("Johan")),
            ("acquisition offer", 5000, None),
        ];
        for (content, level, expected) in cases {
            let outcome = chain.submit(&Request::new(content, level));
            match expected {
                Some(name) => assert_eq!(
                    outcome,
                    Outcome::HandledBy {
                        handler: name.to_string()
                    },
                    "request {content:?}"
                ),
                None => assert_eq!(outcome, Outcome::Unhandled, "request {content:?}"),
            }
        }
    }

    #[test]
    fn narration_ends_with_an_unhandled_outcome() {
        let lines = run();
        assert!(!lines.is_empty());
        assert_eq!(lines.last().unwrap(), "outcome: unhandled");
    }
}
