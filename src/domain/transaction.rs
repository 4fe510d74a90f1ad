use std::fmt;

use chrono::NaiveDateTime;

use crate::common::money::Money;

/// One immutable record of a balance-affecting event. Records are only ever
/// appended to an account's history, oldest first.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub kind: TxKind,
    pub amount: Money,
    pub time: NaiveDateTime,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxKind {
    Deposit,
    Withdrawal,
    /// Debit leg of a transfer; carries the credited account number.
    TransferOut { to: String },
    /// Credit leg of a transfer; carries the debited account number.
    TransferIn { from: String },
}

impl Transaction {
    pub fn new(kind: TxKind, amount: Money, time: NaiveDateTime, note: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            time,
            note: note.into(),
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Deposit => write!(f, "Deposit"),
            TxKind::Withdrawal => write!(f, "Withdrawal"),
            TxKind::TransferOut { to } => write!(f, "Transfer to {to}"),
            TxKind::TransferIn { from } => write!(f, "Transfer from {from}"),
        }
    }
}
