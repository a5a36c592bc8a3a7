//! Bridge — pet species and temperament vary independently
//!
//! The species hierarchy and the temperament hierarchy meet only through
//! one field, so any pet can carry any temperament.

trait Temperament {
    fn describe(&self) -> String;
}

struct Shy;

impl Temperament for Shy {
    fn describe(&self) -> String {
        "has a timid temperament".to_string()
    }
}

struct Bold;

impl Temperament for Bold {
    fn describe(&self) -> String {
        "has a bold temperament".to_string()
    }
}

struct Pet {
    species: &'static str,
    cry: &'static str,
    temperament: Box<dyn Temperament>,
}

impl Pet {
    fn dog(temperament: Box<dyn Temperament>) -> Self {
        Self {
            species: "dog",
            cry: "woof",
            temperament,
        }
    }

    fn cat(temperament: Box<dyn Temperament>) -> Self {
        Self {
            species: "cat",
            cry: "meow",
            temperament,
        }
    }

    fn describe(&self) -> Vec<String> {
        vec![
            self.temperament.describe(),
            format!("the {} goes {}", self.species, self.cry),
        ]
    }
}

pub fn run() -> Vec<String> {
    let my_pet = Pet::cat(Box::new(Shy));
    let neighbors_pet = Pet::dog(Box::new(Bold));

    let mut lines = my_pet.describe();
    lines.extend(neighbors_pet.describe());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_species_takes_any_temperament() {
        let bold_cat = Pet::cat(Box::new(Bold));
        let lines = bold_cat.describe();
        assert_eq!(lines[0], "has a bold temperament");
        assert_eq!(lines[1], "the cat goes meow");

        let shy_dog = Pet::dog(Box::new(Shy));
        let lines = shy_dog.describe();
        assert_eq!(lines[0], "has a timid temperament");
        assert_eq!(lines[1], "the dog goes woof");
    }
}
