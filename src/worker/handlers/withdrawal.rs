use chrono::Local;

use crate::common::{error::BankError, money::Money};
use crate::domain::ledger::{self, Ledger};
use crate::domain::transaction::{Transaction, TxKind};

pub fn handle(
    ledger: &mut Ledger,
    number: &str,
    pin: u16,
    amount: Money,
) -> Result<Money, BankError> {
    ledger.validate_account(number)?;
    ledger.validate_pin(number, pin)?;
    ledger::validate_amount(amount)?;
    ledger.validate_balance(number, amount)?;

    let time = Local::now().naive_local();
    let account = ledger.get_mut(number)?;
    account.balance -= amount;
    account.record(Transaction::new(
        TxKind::Withdrawal,
        amount,
        time,
        "Cash withdrawal",
    ));
    Ok(account.balance)
}
