//! Factory Method — coffee machines decide which coffee they brew

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coffee {
    Americano,
    Latte,
}

impl Coffee {
    fn tasting_note(&self) -> &'static str {
        match self {
            Self::Americano => "bitter, with a clean finish",
            Self::Latte => "smooth and nutty",
        }
    }
}

/// The factory method lives on the machine, not the caller
trait CoffeeMachine {
    fn brew(&self) -> Coffee;
}

struct AmericanoMachine;

impl CoffeeMachine for AmericanoMachine {
    fn brew(&self) -> Coffee {
        Coffee::Americano
    }
}

struct LatteMachine;

impl CoffeeMachine for LatteMachine {
    fn brew(&self) -> Coffee {
        Coffee::Latte
    }
}

pub fn run() -> Vec<String> {
    let home_machine = AmericanoMachine;
    let office_machine = LatteMachine;

    vec![
        home_machine.brew().tasting_note().to_string(),
        office_machine.brew().tasting_note().to_string(),
    ]
}
