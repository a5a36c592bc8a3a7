//! Adapter — a 110V appliance on a 220V outlet
//!
//! The fan only understands 110V; the adapter speaks the 220V interface on
//! its behalf, stepping the voltage down before delegating.

trait JapanesePlug {
    fn run_on_110v(&self) -> String;
}

struct JapaneseFan;

impl JapanesePlug for JapaneseFan {
    fn run_on_110v(&self) -> String {
        "japanese fan spinning".to_string()
    }
}

trait KoreanOutlet {
    fn run_on_220v(&self) -> Vec<String>;
}

struct KoreanAircon;

impl KoreanOutlet for KoreanAircon {
    fn run_on_220v(&self) -> Vec<String> {
        vec!["korean air conditioner running".to_string()]
    }
}

struct VoltageAdapter<P: JapanesePlug> {
    appliance: P,
}

impl<P: JapanesePlug> KoreanOutlet for VoltageAdapter<P> {
    fn run_on_220v(&self) -> Vec<String> {
        vec![
            "adapter: stepping 220V down to 110V".to_string(),
            self.appliance.run_on_110v(),
        ]
    }
}

pub fn run() -> Vec<String> {
    let adapted_fan = VoltageAdapter {
        appliance: JapaneseFan,
    };
    let aircon = KoreanAircon;

    let mut lines = adapted_fan.run_on_220v();
    lines.extend(aircon.run_on_220v());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_converts_then_delegates() {
        let adapted = VoltageAdapter {
            appliance: JapaneseFan,
        };
        let lines = adapted.run_on_220v();
        assert_eq!(lines[0], "adapter: stepping 220V down to 110V");
        assert_eq!(lines[1], "japanese fan spinning");
    }

    #[test]
    fn native_appliance_needs_no_adapter() {
        assert_eq!(
            KoreanAircon.run_on_220v(),
            vec!["korean air conditioner running".to_string()]
        );
    }
}
