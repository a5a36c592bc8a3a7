//! Mediator — a control tower arbitrates runway access
//!
//! Airplanes never talk to each other; every takeoff request goes through
//! the tower, which tracks which runways are claimed.

use std::collections::HashSet;

/// The mediator. Owns the only record of runway occupancy.
#[derive(Default)]
struct ControlTower {
    claimed: HashSet<String>,
}

impl ControlTower {
    /// Grant the runway if free, claiming it; deny otherwise.
    fn request_clearance(&mut self, runway: &str) -> (bool, String) {
        if self.claimed.contains(runway) {
            (
                false,
                "tower: runway in use, request another".to_string(),
            )
        } else {
            self.claimed.insert(runway.to_string());
            (true, "tower: cleared for takeoff".to_string())
        }
    }
}

struct Airplane {
    callsign: String,
}

impl Airplane {
    fn new(callsign: impl Into<String>) -> Self {
        Self {
            callsign: callsign.into(),
        }
    }

    fn request_takeoff(&self, tower: &mut ControlTower, runway: &str) -> Vec<String> {
        let mut lines = vec![format!(
            "{}: requesting takeoff on {}",
            self.callsign, runway
        )];
        let (granted, reply) = tower.request_clearance(runway);
        lines.push(reply);
        if granted {
            lines.push(format!("{}: clearance received, rolling", self.callsign));
        } else {
            lines.push(format!("{}: acknowledged, holding", self.callsign));
        }
        lines
    }
}

pub fn run() -> Vec<String> {
    let mut tower = ControlTower::default();
    let jeju = Airplane::new("Jeju Air 123");
    let asiana = Airplane::new("Asiana 456");

    let mut lines = Vec::new();
    lines.extend(jeju.request_takeoff(&mut tower, "runway 1"));
    lines.extend(asiana.request_takeoff(&mut tower, "runway 1"));
    lines.extend(asiana.request_takeoff(&mut tower, "runway 2"));
    lines
}
