//! Proxy — an ATM guards the bank server behind a PIN check
//!
//! The ATM and the raw server expose the same interface; only the ATM
//! verifies the PIN before letting a withdrawal through. Reaching the
//! server directly skips the guard entirely, which is the point of the
//! demonstration.

struct Account {
    balance: i64,
    pin: String,
}

impl Account {
    fn new(balance: i64, pin: &str) -> Self {
        Self {
            balance,
            pin: pin.to_string(),
        }
    }

    fn pin_matches(&self, entered: &str) -> bool {
        self.pin == entered
    }
}

trait Bank {
    fn deposit(&self, account: &mut Account, amount: i64) -> Vec<String>;
    fn withdraw(&self, account: &mut Account, amount: i64, pin: &str) -> Vec<String>;
}

/// The real subject — trusts every caller
struct BankServer;

impl Bank for BankServer {
    fn deposit(&self, account: &mut Account, amount: i64) -> Vec<String> {
        account.balance += amount;
        vec![
            "deposit complete".to_string(),
            format!("current balance: {}", account.balance),
        ]
    }

    fn withdraw(&self, account: &mut Account, amount: i64, _pin: &str) -> Vec<String> {
        account.balance -= amount;
        vec![
            "withdrawal complete".to_string(),
            format!("current balance: {}", account.balance),
        ]
    }
}

/// The protection proxy — same interface, PIN check in front
struct Atm {
    server: BankServer,
}

impl Bank for Atm {
    fn deposit(&self, account: &mut Account, amount: i64) -> Vec<String> {
        self.server.deposit(account, amount)
    }

    fn withdraw(&self, account: &mut Account, amount: i64, pin: &str) -> Vec<String> {
        if !account.pin_matches(pin) {
            return vec!["PIN does not match".to_string()];
        }
        self.server.withdraw(account, amount, pin)
    }
}

pub fn run() -> Vec<String> {
    let mut account = Account::new(100_000, "1234");
    let atm = Atm { server: BankServer };
    let mut lines = Vec::new();

    lines.extend(atm.deposit(&mut account, 50_000));
    lines.extend(atm.withdraw(&mut account, 1_000, "1000"));
    lines.extend(atm.withdraw(&mut account, 77_777, "1234"));

    // Straight to the server: no proxy, no PIN check.
    let server = BankServer;
    lines.extend(server.deposit(&mut account, 1_000_000_000));
    lines
}
