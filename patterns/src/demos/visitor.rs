//! Visitor — zoo keeper rounds visit each species differently
//!
//! New rounds (feeding, health checks) are added without touching the
//! animals; each animal only hands itself to the visitor.

struct Giraffe {
    favorite_food: String,
}

struct Lion {
    favorite_food: String,
}

struct Penguin {
    favorite_food: String,
}

/// One keeper round over the whole enclosure
trait KeeperRound {
    fn visit_giraffe(&self, giraffe: &Giraffe) -> String;
    fn visit_lion(&self, lion: &Lion) -> String;
    fn visit_penguin(&self, penguin: &Penguin) -> String;
}

trait Animal {
    fn accept(&self, round: &dyn KeeperRound) -> String;
}

impl Animal for Giraffe {
    fn accept(&self, round: &dyn KeeperRound) -> String {
        round.visit_giraffe(self)
    }
}

impl Animal for Lion {
    fn accept(&self, round: &dyn KeeperRound) -> String {
        round.visit_lion(self)
    }
}

impl Animal for Penguin {
    fn accept(&self, round: &dyn KeeperRound) -> String {
        round.visit_penguin(self)
    }
}

struct FeedingRound;

impl KeeperRound for FeedingRound {
    fn visit_giraffe(&self, giraffe: &Giraffe) -> String {
        format!("fed the giraffe its {}", giraffe.favorite_food)
    }

    fn visit_lion(&self, lion: &Lion) -> String {
        format!("fed the lion its {}", lion.favorite_food)
    }

    fn visit_penguin(&self, penguin: &Penguin) -> String {
        format!("fed the penguin its {}", penguin.favorite_food)
    }
}

struct HealthCheckRound;

impl KeeperRound for HealthCheckRound {
    fn visit_giraffe(&self, _: &Giraffe) -> String {
        "checking the giraffe's neck".to_string()
    }

    fn visit_lion(&self, _: &Lion) -> String {
        "checking the lion's claws".to_string()
    }

    fn visit_penguin(&self, _: &Penguin) -> String {
        "checking the penguin's beak".to_string()
    }
}

pub fn run() -> Vec<String> {
    let animals: Vec<Box<dyn Animal>> = vec![
        Box::new(Giraffe {
            favorite_food: "leaves".to_string(),
        }),
        Box::new(Lion {
            favorite_food: "meat".to_string(),
        }),
        Box::new(Penguin {
            favorite_food: "shrimp".to_string(),
        }),
    ];

    let mut lines = Vec::new();
    for round in [&FeedingRound as &dyn KeeperRound, &HealthCheckRound] {
        for animal in &animals {
            lines.push(animal.accept(round));
        }
    }
    lines
}
