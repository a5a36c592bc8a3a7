//! Command — a waiter queues kitchen orders as objects
//!
//! Each order knows how to execute itself against the chef and how to undo
//! itself. The waiter only queues and replays commands; the chef is the sole
//! receiver.

/// The receiver — all cooking happens here
struct Chef;

impl Chef {
    fn cook(&self, dish: &Dish) -> String {
        match dish {
            Dish::Steak => "chef sears the steak".to_string(),
            Dish::Fries => "chef drops the fries in oil".to_string(),
            Dish::Lemonade => "chef mixes a lemonade".to_string(),
        }
    }

    fn cancel(&self, dish: &Dish) -> String {
        match dish {
            Dish::Steak => "steak order cancelled".to_string(),
            Dish::Fries => "fries order cancelled".to_string(),
            Dish::Lemonade => "lemonade order cancelled".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dish {
    Steak,
    Fries,
    Lemonade,
}

/// A queued order bound to its receiver's dish
trait OrderCommand {
    fn execute(&self, chef: &Chef) -> String;
    fn undo(&self, chef: &Chef) -> String;
}

struct DishOrder {
    dish: Dish,
}

impl OrderCommand for DishOrder {
    fn execute(&self, chef: &Chef) -> String {
        chef.cook(&self.dish)
    }

    fn undo(&self, chef: &Chef) -> String {
        chef.cancel(&self.dish)
    }
}

/// The invoker — holds commands without knowing what they do
#[derive(Default)]
struct Waiter {
    queue: Vec<Box<dyn OrderCommand>>,
}

impl Waiter {
    fn accept(&mut self, order: Box<dyn OrderCommand>) -> String {
        self.queue.push(order);
        "waiter: got your order".to_string()
    }

    fn deliver_all(&mut self, chef: &Chef) -> Vec<String> {
        let mut lines = vec![format!("waiter: sending {} orders to the kitchen", self.queue.len())];
        for order in self.queue.drain(..) {
            lines.push(order.execute(chef));
        }
        lines.push("waiter: all orders delivered, thank you".to_string());
        lines
    }

    fn withdraw(&self, order: &dyn OrderCommand, chef: &Chef) -> Vec<String> {
        vec![
            "waiter: cancelling that order for you".to_string(),
            order.undo(chef),
        ]
    }
}

pub fn run() -> Vec<String> {
    let chef = Chef;
    let mut waiter = Waiter::default();
    let mut lines = Vec::new();

    lines.push(waiter.accept(Box::new(DishOrder { dish: Dish::Steak })));
    lines.push(waiter.accept(Box::new(DishOrder { dish: Dish::Fries })));
    lines.push(waiter.accept(Box::new(DishOrder { dish: Dish::Lemonade })));

    lines.extend(waiter.deliver_all(&chef));

    let regretted = DishOrder { dish: Dish::Fries };
    lines.extend(waiter.withdraw(&regretted, &chef));
    lines
}
