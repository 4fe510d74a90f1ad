//! In-memory bank ledger: pin-gated accounts, deposits, withdrawals,
//! transfers, and tabular reporting. Single-process and volatile; every
//! ledger is an owned value and all state dies with it.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
