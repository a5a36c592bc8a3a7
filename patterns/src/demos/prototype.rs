//! Prototype — new robots are cloned from a prime specimen
//!
//! `Clone` carries the stats; only the name is reassigned per copy.

#[derive(Debug, Clone, PartialEq, Eq)]
struct Robot {
    name: String,
    speed: u32,
    strength: u32,
}

impl Robot {
    fn new(name: impl Into<String>, speed: u32, strength: u32) -> Self {
        Self {
            name: name.into(),
            speed,
            strength,
        }
    }

    /// Clone the specimen under a new name, stats intact.
    fn clone_as(&self, name: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.name = name.into();
        copy
    }

    fn status(&self) -> Vec<String> {
        vec![
            "--- robot status ---".to_string(),
            format!("name     : {}", self.name),
            format!("speed    : {}", self.speed),
            format!("strength : {}", self.strength),
        ]
    }
}

pub fn run() -> Vec<String> {
    let prime = Robot::new("Prime", 100, 6);
    let second = prime.clone_as("Second");
    let third = prime.clone_as("Third");

    let mut lines = Vec::new();
    for robot in [&prime, &second, &third] {
        lines.extend(robot.status());
    }
    lines
}
