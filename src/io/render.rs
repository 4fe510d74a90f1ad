//! Read-only tabular projections of ledger state. Both views are pin-gated
//! like every other operation; neither mutates anything.

use crate::common::error::BankError;
use crate::domain::ledger::Ledger;
use crate::io::table::Table;

/// Two-column Field/Value view of an account.
///
/// Currency amounts carry the ₹ glyph; the date of birth renders in
/// `YYYY-MM-DD` form.
pub fn account_info(ledger: &Ledger, number: &str, pin: u16) -> Result<Table, BankError> {
    let account = ledger.authorized(number, pin)?;

    let balance = format!("₹{}", account.balance);
    let date_of_birth = account.date_of_birth.to_string();

    let mut table = Table::new(["Field", "Value"]);
    table.row(["Account Number", number]);
    table.row(["Account Holder", account.holder.as_str()]);
    table.row(["Balance", balance.as_str()]);
    table.row(["Date of Birth", date_of_birth.as_str()]);
    Ok(table)
}

/// Four-column view of the full transaction history, oldest first, with
/// timestamps formatted as `YYYY-MM-DD HH:MM:SS`.
pub fn transaction_history(ledger: &Ledger, number: &str, pin: u16) -> Result<Table, BankError> {
    let account = ledger.authorized(number, pin)?;

    let mut table = Table::new(["Type", "Amount (₹)", "Time", "Note"]);
    for tx in account.transactions() {
        table.row([
            tx.kind.to_string(),
            tx.amount.to_string(),
            tx.time.format("%Y-%m-%d %H:%M:%S").to_string(),
            tx.note.clone(),
        ]);
    }
    Ok(table)
}
