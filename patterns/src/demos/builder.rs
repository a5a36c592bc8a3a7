//! Builder — a sandwich assembled step by step
//!
//! The vegetable step is subtractive: the builder starts from the house
//! list and the customer names what to leave out.

const HOUSE_VEGETABLES: [&str; 5] = ["lettuce", "tomato", "cucumber", "pickles", "olives"];

struct Sandwich {
    menu: String,
    bread: String,
    cheese: String,
    vegetables: Vec<String>,
    sauce: String,
}

impl Sandwich {
    fn contents(&self) -> Vec<String> {
        vec![
            "my sandwich, itemized:".to_string(),
            format!("menu       : {}", self.menu),
            format!("bread      : {}", self.bread),
            format!("cheese     : {}", self.cheese),
            format!("vegetables : {}", self.vegetables.join(", ")),
            format!("sauce      : {}", self.sauce),
        ]
    }
}

#[derive(Default)]
struct SandwichBuilder {
    menu: String,
    bread: String,
    cheese: String,
    excluded: Vec<String>,
    sauce: String,
}

impl SandwichBuilder {
    fn menu(mut self, menu: &str) -> Self {
        self.menu = menu.to_string();
        self
    }

    fn bread(mut self, bread: &str) -> Self {
        self.bread = bread.to_string();
        self
    }

    fn cheese(mut self, cheese: &str) -> Self {
        self.cheese = cheese.to_string();
        self
    }

    fn exclude_vegetables(mut self, excluded: &[&str]) -> Self {
        self.excluded = excluded.iter().map(|v| v.trim().to_string()).collect();
        self
    }

    fn sauce(mut self, sauce: &str) -> Self {
        self.sauce = sauce.to_string();
        self
    }

    fn build(self) -> Sandwich {
        let vegetables: Vec<String> = HOUSE_VEGETABLES
            .into_iter()
            .map(String::from)
            .filter(|v| !self.excluded.contains(v))
            .collect();
        Sandwich {
            menu: self.menu,
            bread: self.bread,
            cheese: self.cheese,
            vegetables,
            sauce: self.sauce,
        }
    }
}

pub fn run() -> Vec<String> {
    let sandwich = SandwichBuilder::default()
        .menu("roast chicken")
        .bread("flatbread")
        .cheese("american cheese")
        .exclude_vegetables(&["cucumber", "tomato"])
        .sauce("mustard, salt, pepper")
        .build();

    sandwich.contents()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusions_are_removed_from_the_house_list() {
        let sandwich = SandwichBuilder::default()
            .exclude_vegetables(&["cucumber", "tomato"])
            .build();
        assert_eq!(sandwich.vegetables, vec!["lettuce", "pickles", "olives"]);
    }

    #[test]
    fn no_exclusions_keeps_everything() {
        let sandwich = SandwichBuilder::default().build();
        assert_eq!(sandwich.vegetables.len(), HOUSE_VEGETABLES.len());
    }

    #[test]
    fn steps_can_run_in_any_order() {
        let sandwich = SandwichBuilder::default()
            .sauce("mustard")
            .menu("roast chicken")
            .build();
        assert_eq!(sandwich.menu, "roast chicken");
        assert_eq!(sandwich.sauce, "mustard");
    }
}
