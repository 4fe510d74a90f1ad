use chrono::Local;

use crate::common::{error::BankError, money::Money};
use crate::domain::ledger::{self, Ledger};
use crate::domain::transaction::{Transaction, TxKind};

/// Moves `amount` from `from` to `to`. The pin authorizes the source
/// account only; the destination balance has no upper bound.
pub fn handle(
    ledger: &mut Ledger,
    from: &str,
    to: &str,
    pin: u16,
    amount: Money,
) -> Result<(Money, Money), BankError> {
    ledger.validate_account(from)?;
    ledger.validate_account(to)?;
    ledger.validate_pin(from, pin)?;
    ledger::validate_amount(amount)?;
    ledger.validate_balance(from, amount)?;

    // both legs carry the same timestamp
    let time = Local::now().naive_local();

    let source = ledger.get_mut(from)?;
    source.balance -= amount;
    source.record(Transaction::new(
        TxKind::TransferOut {
            to: to.to_string(),
        },
        amount,
        time,
        "Cash transfer",
    ));

    let destination = ledger.get_mut(to)?;
    destination.balance += amount;
    destination.record(Transaction::new(
        TxKind::TransferIn {
            from: from.to_string(),
        },
        amount,
        time,
        "Cash transfer",
    ));

    // re-read after both legs so a self-transfer reports the settled balance
    let balance_from = ledger.get_mut(from)?.balance;
    let balance_to = ledger.get_mut(to)?.balance;
    Ok((balance_from, balance_to))
}
