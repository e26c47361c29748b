//! Bank accounts.
//!
//! Balances are only changed through [`Account`] methods. [`SavingsAccount`]
//! carries a deprecated constructor and interest method next to their
//! PIN-protected replacements; both pairs run the same code path.

use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

pub type Dollars = f64;

/// Core functionality of a bank account.
pub trait Account {
    fn balance(&self) -> Dollars;

    fn deposit(&mut self, amount: Dollars);

    /// Withdraw `amount`. Asking for more than the balance empties the account.
    fn withdraw(&mut self, amount: Dollars);
}

/// A plain account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BasicAccount {
    balance: Dollars,
}

impl BasicAccount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Account for BasicAccount {
    fn balance(&self) -> Dollars {
        self.balance
    }

    fn deposit(&mut self, amount: Dollars) {
        self.balance += amount;
    }

    fn withdraw(&mut self, amount: Dollars) {
        if amount <= self.balance {
            self.balance -= amount;
        } else {
            self.balance = 0.0;
        }
    }
}

/// A check written against a [`CheckingAccount`].
///
/// Only a checking account can create one, and only a deposit can cash it.
#[derive(Debug, PartialEq, Serialize)]
pub struct Check {
    account: String,
    amount: Dollars,
    cashed: bool,
}

impl Check {
    /// Number of the account the check was drawn on.
    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn amount(&self) -> Dollars {
        self.amount
    }

    pub fn is_cashed(&self) -> bool {
        self.cashed
    }

    fn cash(&mut self) {
        self.cashed = true;
    }
}

/// An account that can write and cash checks.
#[derive(Debug, Clone)]
pub struct CheckingAccount {
    inner: BasicAccount,
    account_number: String,
}

impl Default for CheckingAccount {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckingAccount {
    pub fn new() -> Self {
        Self {
            inner: BasicAccount::new(),
            account_number: Uuid::new_v4().to_string(),
        }
    }

    /// Write a check, withdrawing its amount. `None` unless the balance exceeds it.
    pub fn write_check(&mut self, amount: Dollars) -> Option<Check> {
        if self.balance() <= amount {
            debug!("Check for {:.2} refused, balance {:.2}", amount, self.balance());
            return None;
        }

        let check = Check {
            account: self.account_number.clone(),
            amount,
            cashed: false,
        };
        self.withdraw(check.amount);
        Some(check)
    }

    /// Deposit a check into this account and mark it cashed.
    pub fn deposit_check(&mut self, check: &mut Check) -> CoreResult<()> {
        if check.is_cashed() {
            return Err(CoreError::CheckAlreadyCashed {
                amount: check.amount,
            });
        }

        self.deposit(check.amount);
        check.cash();
        Ok(())
    }
}

impl Account for CheckingAccount {
    fn balance(&self) -> Dollars {
        self.inner.balance()
    }

    fn deposit(&mut self, amount: Dollars) {
        self.inner.deposit(amount);
    }

    fn withdraw(&mut self, amount: Dollars) {
        self.inner.withdraw(amount);
    }
}

/// An interest-bearing account protected by a PIN.
#[derive(Debug, Clone)]
pub struct SavingsAccount {
    inner: BasicAccount,
    interest_rate: f64,
    pin: u32,
}

impl SavingsAccount {
    /// Legacy constructor. Creates an account with PIN 0.
    #[deprecated(note = "Use SavingsAccount::with_pin(interest_rate, pin) instead")]
    pub fn new(interest_rate: f64) -> Self {
        warn!("SavingsAccount::new is deprecated; use SavingsAccount::with_pin");
        Self::with_pin(interest_rate, 0)
    }

    pub fn with_pin(interest_rate: f64, pin: u32) -> Self {
        Self {
            inner: BasicAccount::new(),
            interest_rate,
            pin,
        }
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Legacy interest processing. Skips the PIN check.
    #[deprecated(note = "Use SavingsAccount::process_interest_with_pin(pin) instead")]
    pub fn process_interest(&mut self) {
        warn!("SavingsAccount::process_interest is deprecated; use process_interest_with_pin");
        self.apply_interest();
    }

    /// Add one period of interest if `pin` matches.
    pub fn process_interest_with_pin(&mut self, pin: u32) -> CoreResult<()> {
        if pin != self.pin {
            return Err(CoreError::InvalidPin);
        }
        self.apply_interest();
        Ok(())
    }

    fn apply_interest(&mut self) {
        let interest = self.balance() * self.interest_rate;
        debug!("Applying interest {:.2}", interest);
        self.deposit(interest);
    }
}

impl Account for SavingsAccount {
    fn balance(&self) -> Dollars {
        self.inner.balance()
    }

    fn deposit(&mut self, amount: Dollars) {
        self.inner.deposit(amount);
    }

    fn withdraw(&mut self, amount: Dollars) {
        self.inner.withdraw(amount);
    }
}

/// Open a new account without exposing which kind it is.
pub fn create_account() -> impl Account {
    CheckingAccount::new()
}
