//! Decorator — toppings stack onto an ice cream
//!
//! Every wrapper is itself a dessert, so toppings compose in any depth and
//! order; description and cost accumulate through the layers.

trait Dessert {
    fn description(&self) -> String;
    fn cost(&self) -> u32;
}

struct PlainIceCream;

impl Dessert for PlainIceCream {
    fn description(&self) -> String {
        "plain ice cream".to_string()
    }

    fn cost(&self) -> u32 {
        4500
    }
}

struct ChocolateSyrup<D: Dessert> {
    base: D,
}

impl<D: Dessert> Dessert for ChocolateSyrup<D> {
    fn description(&self) -> String {
        format!("{} + chocolate syrup", self.base.description())
    }

    fn cost(&self) -> u32 {
        self.base.cost() + 2000
    }
}

struct FruitTopping<D: Dessert> {
    base: D,
}

impl<D: Dessert> Dessert for FruitTopping<D> {
    fn description(&self) -> String {
        format!("{} + fruit", self.base.description())
    }

    fn cost(&self) -> u32 {
        self.base.cost() + 3500
    }
}

fn announce(dessert: &impl Dessert) -> Vec<String> {
    vec![dessert.description(), format!("{} won", dessert.cost())]
}

pub fn run() -> Vec<String> {
    let plain = PlainIceCream;
    let mut lines = announce(&plain);

    let choco = ChocolateSyrup { base: PlainIceCream };
    lines.extend(announce(&choco));

    let choco_fruit = FruitTopping { base: choco };
    lines.extend(announce(&choco_fruit));
    lines
}
