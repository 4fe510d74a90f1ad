use std::collections::HashMap;

use rand::Rng;

use crate::common::{error::BankError, money::Money};
use crate::domain::account::Account;

/// Hard cap on open accounts. Equal to the identifier suffix space, so a
/// free suffix always exists while the cap holds.
pub const MAX_ACCOUNTS: usize = 10_000;
/// Balance every account must keep after any debit.
pub const MIN_BALANCE: Money = Money::new(100);
pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 80;
/// Every account number is this fixed prefix plus a zero-padded 4-digit
/// random suffix.
pub const ACCOUNT_PREFIX: &str = "230406";
pub const MIN_PIN: u16 = 1000;
pub const MAX_PIN: u16 = 9999;

const SUFFIX_SPACE: u32 = 10_000;

/// The component owning all accounts and enforcing transaction rules.
///
/// A `Ledger` is a plain owned value, so independent ledgers can coexist
/// (one per test, for instance). Accounts never escape as mutable
/// references; all mutation goes through the operation handlers.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    pub fn accounts(&self) -> &HashMap<String, Account> {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn get(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    pub(crate) fn get_mut(&mut self, number: &str) -> Result<&mut Account, BankError> {
        self.accounts
            .get_mut(number)
            .ok_or_else(|| BankError::AccountNotFound(number.to_string()))
    }

    pub(crate) fn insert(&mut self, number: String, account: Account) {
        self.accounts.insert(number, account);
    }

    /// Draws 4-digit suffixes until one is unused. Retries are unbounded;
    /// the registry cap guarantees termination but draws get slow as the
    /// suffix space fills up.
    pub(crate) fn generate_account_number(&self, rng: &mut impl Rng) -> String {
        loop {
            let suffix = rng.random_range(0..SUFFIX_SPACE);
            let number = format!("{}{:04}", ACCOUNT_PREFIX, suffix);
            if !self.accounts.contains_key(&number) {
                return number;
            }
        }
    }

    pub(crate) fn generate_pin(rng: &mut impl Rng) -> u16 {
        rng.random_range(MIN_PIN..=MAX_PIN)
    }

    // Pure read checks. Operations call these in their contract order:
    // account existence before pin, pin before amount, amount before
    // balance sufficiency.

    pub fn validate_account(&self, number: &str) -> Result<(), BankError> {
        if self.accounts.contains_key(number) {
            Ok(())
        } else {
            Err(BankError::AccountNotFound(number.to_string()))
        }
    }

    pub fn validate_pin(&self, number: &str, pin: u16) -> Result<(), BankError> {
        let account = self
            .accounts
            .get(number)
            .ok_or_else(|| BankError::AccountNotFound(number.to_string()))?;
        if account.pin_matches(pin) {
            Ok(())
        } else {
            Err(BankError::InvalidPin)
        }
    }

    pub fn validate_balance(&self, number: &str, amount: Money) -> Result<(), BankError> {
        let account = self
            .accounts
            .get(number)
            .ok_or_else(|| BankError::AccountNotFound(number.to_string()))?;
        if account.balance - amount < MIN_BALANCE {
            Err(BankError::InsufficientBalance)
        } else {
            Ok(())
        }
    }

    /// Pin-gated read access to an account.
    pub fn authorized(&self, number: &str, pin: u16) -> Result<&Account, BankError> {
        self.validate_account(number)?;
        self.validate_pin(number, pin)?;
        self.accounts
            .get(number)
            .ok_or_else(|| BankError::AccountNotFound(number.to_string()))
    }

    /// Current balance of an account, pin-gated.
    pub fn balance(&self, number: &str, pin: u16) -> Result<Money, BankError> {
        Ok(self.authorized(number, pin)?.balance)
    }
}

pub fn validate_amount(amount: Money) -> Result<(), BankError> {
    if amount <= Money::zero() {
        return Err(BankError::InvalidAmount(
            "deposit, withdrawal and transfer amounts must be greater than ₹0".to_string(),
        ));
    }
    Ok(())
}
