//! Facade — one check-in call drives every hotel subsystem

struct Housekeeping {
    staff: &'static str,
}

impl Housekeeping {
    fn clean_room(&self) -> String {
        format!("{} cleans the room", self.staff)
    }
}

struct RoomManagement {
    staff: &'static str,
}

impl RoomManagement {
    fn assign_room(&self) -> String {
        format!("{} manages the room assignment", self.staff)
    }
}

struct Kitchen {
    staff: &'static str,
}

impl Kitchen {
    fn start_cooking(&self) -> String {
        format!("{} starts cooking", self.staff)
    }
}

/// The facade. Guests only ever talk to the front desk.
struct FrontDesk {
    manager: &'static str,
    housekeeping: Housekeeping,
    rooms: RoomManagement,
    kitchen: Kitchen,
}

impl FrontDesk {
    fn new() -> Self {
        Self {
            manager: "Darko",
            housekeeping: Housekeeping { staff: "Luke" },
            rooms: RoomManagement { staff: "Alex" },
            kitchen: Kitchen { staff: "Xiukai" },
        }
    }

    fn check_in(&self) -> Vec<String> {
        vec![
            "welcome to the hotel".to_string(),
            format!("{} welcomes you at check-in", self.manager),
            self.housekeeping.clean_room(),
            self.rooms.assign_room(),
            self.kitchen.start_cooking(),
        ]
    }
}

pub fn run() -> Vec<String> {
    FrontDesk::new().check_in()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_in_touches_every_subsystem() {
        let lines = FrontDesk::new().check_in();
        let text = lines.join("\n");
        assert!(text.contains("cleans the room"));
        assert!(text.contains("room assignment"));
        assert!(text.contains("starts cooking"));
    }

    #[test]
    fn subsystems_act_in_check_in_order() {
        let lines = FrontDesk::new().check_in();
        let clean = lines.iter().position(|l| l.contains("cleans")).unwrap();
        let cook = lines.iter().position(|l| l.contains("cooking")).unwrap();
        assert!(clean < cook);
    }
}
