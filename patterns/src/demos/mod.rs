//! Demonstration catalog
//!
//! One submodule per pattern. Every demonstration is a pure function that
//! builds a few values, exercises them, and returns its console narration as
//! lines — no ambient input, no shared state, so running one twice yields
//! identical output. The catalog below is the only lookup surface; the CLI
//! dispatches through it by name.

pub mod abstract_factory;
pub mod adapter;
pub mod bridge;
pub mod builder;
pub mod command;
pub mod decorator;
pub mod escalation;
pub mod facade;
pub mod factory_method;
pub mod flyweight;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod prototype;
pub mod proxy;
pub mod singleton;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;

use serde::{Deserialize, Serialize};

/// Classical pattern families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Behavioral => write!(f, "behavioral"),
            Self::Creational => write!(f, "creational"),
            Self::Structural => write!(f, "structural"),
        }
    }
}

/// A registered demonstration
pub struct DemoEntry {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    run: fn() -> Vec<String>,
}

impl DemoEntry {
    /// Execute the demonstration and collect its narration
    pub fn run(&self) -> Vec<String> {
        (self.run)()
    }
}

/// Error type for catalog lookups
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("unknown demonstration: {name} (try `list`)")]
    Unknown { name: String },
}

/// Every registered demonstration, in catalog order
pub const CATALOG: &[DemoEntry] = &[
    DemoEntry {
        name: "escalation-chain",
        category: Category::Behavioral,
        summary: "requests climb a staff ladder until someone can handle them",
        run: escalation::run,
    },
    DemoEntry {
        name: "command",
        category: Category::Behavioral,
        summary: "a waiter queues kitchen orders, delivers them, undoes one",
        run: command::run,
    },
    DemoEntry {
        name: "mediator",
        category: Category::Behavioral,
        summary: "a control tower arbitrates runway claims between airplanes",
        run: mediator::run,
    },
    DemoEntry {
        name: "memento",
        category: Category::Behavioral,
        summary: "a game snapshots progress into save slots and restores it",
        run: memento::run,
    },
    DemoEntry {
        name: "observer",
        category: Category::Behavioral,
        summary: "channel uploads notify every current subscriber",
        run: observer::run,
    },
    DemoEntry {
        name: "prototype",
        category: Category::Behavioral,
        summary: "new robots are cloned from a prime specimen",
        run: prototype::run,
    },
    DemoEntry {
        name: "state",
        category: Category::Behavioral,
        summary: "an order narrates itself differently through its lifecycle",
        run: state::run,
    },
    DemoEntry {
        name: "strategy",
        category: Category::Behavioral,
        summary: "one gun, interchangeable ammunition with different effects",
        run: strategy::run,
    },
    DemoEntry {
        name: "template-method",
        category: Category::Behavioral,
        summary: "a fixed pizza routine with recipe-specific steps and hooks",
        run: template_method::run,
    },
    DemoEntry {
        name: "visitor",
        category: Category::Behavioral,
        summary: "zoo keeper rounds visit each animal species differently",
        run: visitor::run,
    },
    DemoEntry {
        name: "abstract-factory",
        category: Category::Creational,
        summary: "cafeteria stations produce families of dishes",
        run: abstract_factory::run,
    },
    DemoEntry {
        name: "builder",
        category: Category::Creational,
        summary: "a sandwich assembled step by step with exclusions",
        run: builder::run,
    },
    DemoEntry {
        name: "factory-method",
        category: Category::Creational,
        summary: "coffee machines decide which coffee they brew",
        run: factory_method::run,
    },
    DemoEntry {
        name: "singleton",
        category: Category::Creational,
        summary: "a class elects exactly one captain, first vote wins",
        run: singleton::run,
    },
    DemoEntry {
        name: "adapter",
        category: Category::Structural,
        summary: "a 110V appliance runs on a 220V outlet through an adapter",
        run: adapter::run,
    },
    DemoEntry {
        name: "bridge",
        category: Category::Structural,
        summary: "pet species and temperament vary independently",
        run: bridge::run,
    },
    DemoEntry {
        name: "decorator",
        category: Category::Structural,
        summary: "toppings stack onto an ice cream, accumulating cost",
        run: decorator::run,
    },
    DemoEntry {
        name: "facade",
        category: Category::Structural,
        summary: "one check-in call drives every hotel subsystem",
        run: facade::run,
    },
    DemoEntry {
        name: "flyweight",
        category: Category::Structural,
        summary: "a library shares one book value among its borrowers",
        run: flyweight::run,
    },
    DemoEntry {
        name: "proxy",
        category: Category::Structural,
        summary: "an ATM guards the bank server behind a PIN check",
        run: proxy::run,
    },
];

/// Look up a demonstration by name
pub fn find(name: &str) -> Option<&'static DemoEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

/// Run a demonstration by name
pub fn run(name: &str) -> Result<Vec<String>, DemoError> {
    match find(name) {
        Some(entry) => Ok(entry.run()),
        None => Err(DemoError::Unknown {
            name: name.to_string(),
        }),
    }
}
