//! Abstract Factory — cafeteria stations produce families of dishes
//!
//! Each station knows its own menu; a diner asks a station for food by name
//! and never constructs dishes directly. Ordering off-menu gets you water.

struct Dish {
    name: &'static str,
    taste: &'static str,
}

impl Dish {
    fn tasting_note(&self) -> String {
        format!("{}: {}", self.name, self.taste)
    }
}

/// The factory seam — one impl per cuisine
trait Station {
    fn prepare(&self, order: &str) -> Dish;
}

struct KoreanStation;

impl Station for KoreanStation {
    fn prepare(&self, order: &str) -> Dish {
        match order {
            "kimchi ramen" => Dish {
                name: "kimchi ramen",
                taste: "spicy",
            },
            "bibimbap" => Dish {
                name: "bibimbap",
                taste: "fresh and light",
            },
            _ => off_menu(),
        }
    }
}

struct WesternStation;

impl Station for WesternStation {
    fn prepare(&self, order: &str) -> Dish {
        match order {
            "spaghetti" => Dish {
                name: "spaghetti",
                taste: "salty",
            },
            "fried chicken" => Dish {
                name: "fried chicken",
                taste: "crispy",
            },
            _ => off_menu(),
        }
    }
}

fn off_menu() -> Dish {
    Dish {
        name: "water",
        taste: "you ordered off-menu, so you got water",
    }
}

pub fn run() -> Vec<String> {
    let left_station = KoreanStation;
    let right_station = WesternStation;

    vec![
        left_station.prepare("kimchi ramen").tasting_note(),
        left_station.prepare("bibimbap").tasting_note(),
        right_station.prepare("spaghetti").tasting_note(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stations_serve_their_own_cuisine() {
        assert_eq!(
            KoreanStation.prepare("bibimbap").tasting_note(),
            "bibimbap: fresh and light"
        );
        assert_eq!(
            WesternStation.prepare("fried chicken").tasting_note(),
            "fried chicken: crispy"
        );
    }

    #[test]
    fn off_menu_order_falls_back_to_water() {
        let dish = KoreanStation.prepare("spaghetti");
        assert_eq!(dish.name, "water");
    }
}
