#[derive(thiserror::Error, Debug)]
pub enum BankError {
    #[error("total account limit reached, unable to open a new account")]
    Limit,
    #[error("account {0} not found")]
    AccountNotFound(String),
    #[error("invalid pin")]
    InvalidPin,
    #[error("invalid date of birth, expected YYYY-MM-DD")]
    InvalidDateFormat,
    #[error("account opening is only allowed between the ages of 18 and 80")]
    InvalidAge,
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("balance after a withdrawal or transfer must be at least ₹100")]
    InsufficientBalance,
}
