//! Template Method — a fixed pizza routine with recipe-specific steps
//!
//! `prepare` is the template: the step order is fixed here and recipes only
//! fill in sauce, toppings, and the optional drink hook.

trait PizzaRecipe {
    fn add_sauce(&self) -> String;
    fn add_toppings(&self) -> String;

    /// Hook — a recipe may ask for a drink on the side
    fn drink_pairing(&self) -> Option<String> {
        None
    }

    fn prepare(&self) -> Vec<String> {
        let mut lines = vec![
            "preparing the dough".to_string(),
            self.add_sauce(),
            self.add_toppings(),
            "baking the pizza".to_string(),
            "cutting the pizza".to_string(),
        ];
        if let Some(drink) = self.drink_pairing() {
            lines.push(drink);
            lines.push("adding a cola".to_string());
        }
        lines.push("serving the customer".to_string());
        lines
    }
}

struct SpicyPizza;

impl PizzaRecipe for SpicyPizza {
    fn add_sauce(&self) -> String {
        "spreading hot sauce".to_string()
    }

    fn add_toppings(&self) -> String {
        "adding spicy toppings".to_string()
    }

    fn drink_pairing(&self) -> Option<String> {
        Some("too spicy to eat dry".to_string())
    }
}

struct PineapplePizza;

impl PizzaRecipe for PineapplePizza {
    fn add_sauce(&self) -> String {
        "spreading pineapple sauce".to_string()
    }

    fn add_toppings(&self) -> String {
        "adding pineapple chunks".to_string()
    }
}

pub fn run() -> Vec<String> {
    let mut lines = SpicyPizza.prepare();
    lines.extend(PineapplePizza.prepare());
    lines
}
