//! Singleton — a class elects exactly one captain
//!
//! The captaincy is a write-once slot: the first election fills it and
//! every later attempt gets the sitting captain back. Holding the slot in a
//! value (instead of a process-global) keeps repeated runs independent.

use std::sync::OnceLock;

struct Captaincy {
    seat: OnceLock<String>,
}

impl Captaincy {
    fn new() -> Self {
        Self {
            seat: OnceLock::new(),
        }
    }

    /// First candidate wins; later candidates are told who already holds it.
    fn elect(&self, candidate: &str) -> String {
        let mut elected = false;
        let captain = self.seat.get_or_init(|| {
            elected = true;
            candidate.to_string()
        });
        if elected {
            format!("captain {captain} elected")
        } else {
            format!("the class already has a captain: {captain}")
        }
    }

    fn greet(&self, student: &str) -> Vec<String> {
        match self.seat.get() {
            Some(captain) => vec![
                format!("hello, {student}!"),
                format!("I'm {captain}, the class captain"),
            ],
            None => vec!["no captain has been elected yet".to_string()],
        }
    }
}

pub fn run() -> Vec<String> {
    let captaincy = Captaincy::new();
    let mut lines = Vec::new();

    lines.push(captaincy.elect("Minsu"));
    lines.push(captaincy.elect("Sujin"));
    lines.extend(captaincy.greet("Sujin"));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_election_wins() {
        let captaincy = Captaincy::new();
        assert_eq!(captaincy.elect("Minsu"), "captain Minsu elected");
        assert_eq!(
            captaincy.elect("Sujin"),
            "the class already has a captain: Minsu"
        );
        assert_eq!(captaincy.seat.get().map(String::as_str), Some("Minsu"));
    }

    #[test]
    fn greeting_before_an_election_says_so() {
        let captaincy = Captaincy::new();
        assert_eq!(
            captaincy.greet("Sujin"),
            vec!["no captain has been elected yet".to_string()]
        );
    }

    #[test]
    fn separate_captaincies_are_independent() {
        let first = Captaincy::new();
        let second = Captaincy::new();
        first.elect("Minsu");
        assert_eq!(second.elect("Sujin"), "captain Sujin elected");
    }
}
