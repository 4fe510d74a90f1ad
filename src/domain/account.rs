use chrono::{NaiveDate, NaiveDateTime};

use crate::common::money::Money;
use crate::domain::transaction::{Transaction, TxKind};

/// A holder's balance, identity, and transaction history.
///
/// Accounts are owned exclusively by the ledger and only escape to callers
/// as shared references, so the balance and history can only change through
/// ledger operations.
#[derive(Debug, Clone)]
pub struct Account {
    /// Free-text holder name.
    pub holder: String,
    /// Stays at or above the ledger minimum after every completed operation.
    pub balance: Money,
    pub date_of_birth: NaiveDate,
    /// Set once at opening time.
    pub created_at: NaiveDateTime,
    pin: u16,
    transactions: Vec<Transaction>,
}

impl Account {
    /// History starts with the opening deposit.
    pub(crate) fn open(
        holder: &str,
        balance: Money,
        date_of_birth: NaiveDate,
        pin: u16,
        opened_at: NaiveDateTime,
    ) -> Self {
        Self {
            holder: holder.to_string(),
            balance,
            date_of_birth,
            created_at: opened_at,
            pin,
            transactions: vec![Transaction::new(
                TxKind::Deposit,
                balance,
                opened_at,
                "Opening balance",
            )],
        }
    }

    pub fn pin_matches(&self, pin: u16) -> bool {
        self.pin == pin
    }

    /// Full history, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn record(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }
}
