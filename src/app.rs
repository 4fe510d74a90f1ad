//! Scripted demo of the ledger: open two accounts, run a few transactions,
//! and print the rendered tables. This is the external caller from the
//! system's point of view; all rules live in the domain and handlers.

use tracing::info;

use crate::common::money::Money;
use crate::domain::ledger::Ledger;
use crate::io::render;
use crate::worker::handlers::{deposit, open, transfer, withdrawal};

pub fn run() -> anyhow::Result<()> {
    let mut rng = rand::rng();
    let mut ledger = Ledger::new();

    let alice = open::handle(
        &mut ledger,
        &mut rng,
        "Alice",
        Money::new(500),
        "1995-05-12",
        Some(1234),
    )?;
    info!(number = %alice.number, "account opened");

    // no pin supplied, the ledger generates one
    let bob = open::handle(
        &mut ledger,
        &mut rng,
        "Bob",
        Money::new(1000),
        "1988-09-23",
        None,
    )?;
    info!(number = %bob.number, "account opened");

    let balance = deposit::handle(&mut ledger, &alice.number, alice.pin, Money::new(250))?;
    info!(%balance, "deposit applied");

    let balance = withdrawal::handle(&mut ledger, &alice.number, alice.pin, Money::new(150))?;
    info!(%balance, "withdrawal applied");

    let (balance_from, balance_to) = transfer::handle(
        &mut ledger,
        &alice.number,
        &bob.number,
        alice.pin,
        Money::new(200),
    )?;
    info!(%balance_from, %balance_to, "transfer applied");

    println!("{}", render::account_info(&ledger, &alice.number, alice.pin)?);
    println!();
    println!(
        "{}",
        render::transaction_history(&ledger, &alice.number, alice.pin)?
    );
    println!();
    println!(
        "{}",
        render::transaction_history(&ledger, &bob.number, bob.pin)?
    );
    println!();

    let balance = ledger.balance(&alice.number, alice.pin)?;
    println!("Current balance: ₹{}", balance);

    Ok(())
}
