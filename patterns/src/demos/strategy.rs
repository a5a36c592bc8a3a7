//! Strategy — one gun, interchangeable ammunition
//!
//! The gun's firing routine never changes; what a shot does is decided by
//! whichever round is currently loaded.

/// The strategy seam
trait Ammunition {
    fn effect(&self) -> String;
}

struct BlankRound;

impl Ammunition for BlankRound {
    fn effect(&self) -> String {
        "blank round: target staggered".to_string()
    }
}

struct GasRound;

impl Ammunition for GasRound {
    fn effect(&self) -> String {
        "gas round: 10 damage over time".to_string()
    }
}

struct LiveRound;

impl Ammunition for LiveRound {
    fn effect(&self) -> String {
        "live round: 100 damage in one shot".to_string()
    }
}

#[derive(Default)]
struct Gun {
    chamber: Option<Box<dyn Ammunition>>,
}

impl Gun {
    fn load(&mut self, round: Box<dyn Ammunition>) -> String {
        self.chamber = Some(round);
        "round chambered".to_string()
    }

    fn fire(&self) -> Vec<String> {
        match &self.chamber {
            Some(round) => vec!["bang!".to_string(), round.effect()],
            None => vec!["click, empty chamber".to_string()],
        }
    }
}

pub fn run() -> Vec<String> {
    let mut gun = Gun::default();
    let mut lines = Vec::new();

    lines.push(gun.load(Box::new(BlankRound)));
    lines.extend(gun.fire());

    lines.push(gun.load(Box::new(LiveRound)));
    lines.extend(gun.fire());

    lines.push(gun.load(Box::new(GasRound)));
    lines.extend(gun.fire());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_round_decides_the_effect() {
        let mut gun = Gun::default();
        gun.load(Box::new(GasRound));
        assert_eq!(gun.fire()[1], "gas round: 10 damage over time");

        gun.load(Box::new(LiveRound));
        assert_eq!(gun.fire()[1], "live round: 100 damage in one shot");
    }

    #[test]
    fn empty_chamber_dry_fires() {
        let gun = Gun::default();
        assert_eq!(gun.fire(), vec!["click, empty chamber".to_string()]);
    }
}
