//! Memento — game progress snapshotted into save slots
//!
//! The save file captures the player's state without exposing how the game
//! mutates it; the slot holder stores and returns snapshots blindly.

/// The memento. Immutable snapshot of player state.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SaveFile {
    location: String,
    level: u32,
    hp: u32,
}

/// The caretaker. Holds snapshots, never looks inside them.
struct SaveSlots {
    slots: [Option<SaveFile>; 3],
}

impl SaveSlots {
    fn new() -> Self {
        Self {
            slots: [None, None, None],
        }
    }

    fn store(&mut self, slot: usize, save: SaveFile) -> String {
        self.slots[slot] = Some(save);
        format!("system: saved to slot {slot}")
    }

    fn fetch(&self, slot: usize) -> Option<SaveFile> {
        self.slots[slot].clone()
    }
}

/// The originator
struct Game {
    location: String,
    level: u32,
    hp: u32,
    slots: SaveSlots,
}

impl Game {
    fn new() -> Self {
        Self {
            location: String::new(),
            level: 0,
            hp: 0,
            slots: SaveSlots::new(),
        }
    }

    fn start(&mut self) {
        self.location = "Starting Village".to_string();
        self.level = 1;
        self.hp = 50;
    }

    fn level_up(&mut self) -> String {
        self.level += 1;
        self.hp += 50;
        "* level up!".to_string()
    }

    fn warp(&mut self, area: &str) -> String {
        self.location = area.to_string();
        format!("* warping to {area}...")
    }

    fn status(&self) -> Vec<String> {
        vec![
            "------ current status ------".to_string(),
            format!("location : {}", self.location),
            format!("level    : {}", self.level),
            format!("hp       : {}", self.hp),
            "----------------------------".to_string(),
        ]
    }

    fn save(&mut self, slot: usize) -> Vec<String> {
        let snapshot = SaveFile {
            location: self.location.clone(),
            level: self.level,
            hp: self.hp,
        };
        vec![
            format!("system: writing progress to slot {slot}"),
            self.slots.store(slot, snapshot),
        ]
    }

    fn load(&mut self, slot: usize) -> Vec<String> {
        match self.slots.fetch(slot) {
            Some(save) => {
                self.location = save.location;
                self.level = save.level;
                self.hp = save.hp;
                vec![
                    format!("system: loading slot {slot}..."),
                    "system: load complete".to_string(),
                ]
            }
            None => vec![format!("system: slot {slot} is empty")],
        }
    }
}

pub fn run() -> Vec<String> {
    let mut game = Game::new();
    let mut lines = Vec::new();

    game.start();
    lines.extend(game.status());
    lines.push(game.level_up());
    lines.push(game.level_up());
    lines.push(game.warp("Highland Plains"));
    lines.extend(game.status());
    lines.extend(game.save(1));

    // A fresh run wipes progress; the save brings it back.
    game.start();
    lines.extend(game.status());
    lines.extend(game.load(1));
    lines.extend(game.status());
    lines
}
