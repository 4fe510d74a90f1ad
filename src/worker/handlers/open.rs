use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;

use crate::common::{error::BankError, money::Money};
use crate::domain::account::Account;
use crate::domain::ledger::{Ledger, MAX_ACCOUNTS, MAX_AGE, MAX_PIN, MIN_AGE, MIN_BALANCE, MIN_PIN};

/// Receipt handed back to the caller: the generated account number and the
/// effective pin (supplied or generated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub number: String,
    pub pin: u16,
}

pub fn handle(
    ledger: &mut Ledger,
    rng: &mut impl Rng,
    holder: &str,
    opening_balance: Money,
    date_of_birth: &str,
    pin: Option<u16>,
) -> Result<NewAccount, BankError> {
    if ledger.len() >= MAX_ACCOUNTS {
        return Err(BankError::Limit);
    }

    let date_of_birth = NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d")
        .map_err(|_| BankError::InvalidDateFormat)?;

    let now = Local::now().naive_local();
    if !(MIN_AGE..=MAX_AGE).contains(&age_on(date_of_birth, now.date())) {
        return Err(BankError::InvalidAge);
    }

    if opening_balance < MIN_BALANCE {
        return Err(BankError::InvalidAmount(format!(
            "opening balance must be at least ₹{}",
            MIN_BALANCE
        )));
    }

    // a missing or out-of-range pin is replaced, not rejected
    let pin = match pin {
        Some(p) if (MIN_PIN..=MAX_PIN).contains(&p) => p,
        _ => Ledger::generate_pin(rng),
    };

    let number = ledger.generate_account_number(rng);
    let account = Account::open(holder, opening_balance, date_of_birth, pin, now);
    ledger.insert(number.clone(), account);

    Ok(NewAccount { number, pin })
}

/// Age in completed years as of `today`.
fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::ledger::ACCOUNT_PREFIX;
    use crate::domain::transaction::TxKind;

    // January 1st guarantees the birthday has already passed this year,
    // so the computed age equals `age` on any test date.
    fn dob_with_age(age: i32) -> String {
        format!("{:04}-01-01", Local::now().year() - age)
    }

    #[test]
    fn opens_account_and_keeps_the_supplied_pin() {
        let mut ledger = Ledger::new();
        let mut rng = StdRng::seed_from_u64(1);

        let opened = handle(
            &mut ledger,
            &mut rng,
            "Alice",
            Money::new(500),
            "1995-05-12",
            Some(1234),
        )
        .unwrap();

        assert_eq!(opened.pin, 1234);
        assert_eq!(opened.number.len(), 10);
        assert!(opened.number.starts_with(ACCOUNT_PREFIX));

        let account = ledger.get(&opened.number).unwrap();
        assert_eq!(account.holder, "Alice");
        assert_eq!(account.balance, Money::new(500));
        assert_eq!(account.transactions().len(), 1);

        let opening = &account.transactions()[0];
        assert_eq!(opening.kind, TxKind::Deposit);
        assert_eq!(opening.amount, Money::new(500));
        assert_eq!(opening.note, "Opening balance");
    }

    #[test]
    fn generates_a_pin_when_none_is_supplied() {
        let mut ledger = Ledger::new();
        let mut rng = StdRng::seed_from_u64(2);

        let opened = handle(
            &mut ledger,
            &mut rng,
            "Bob",
            Money::new(1000),
            "1988-09-23",
            None,
        )
        .unwrap();

        assert!((MIN_PIN..=MAX_PIN).contains(&opened.pin));
    }

    #[test]
    fn replaces_an_out_of_range_pin() {
        let mut ledger = Ledger::new();
        let mut rng = StdRng::seed_from_u64(3);

        let opened = handle(
            &mut ledger,
            &mut rng,
            "Carol",
            Money::new(300),
            "1970-03-15",
            Some(42),
        )
        .unwrap();

        assert!((MIN_PIN..=MAX_PIN).contains(&opened.pin));
    }

    #[test]
    fn rejects_an_opening_balance_below_the_minimum() {
        let mut ledger = Ledger::new();
        let mut rng = StdRng::seed_from_u64(4);

        let err = handle(
            &mut ledger,
            &mut rng,
            "Dave",
            Money::new(50),
            "1990-01-01",
            None,
        )
        .unwrap_err();

        assert!(matches!(err, BankError::InvalidAmount(_)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn accepts_an_opening_balance_at_the_minimum() {
        let mut ledger = Ledger::new();
        let mut rng = StdRng::seed_from_u64(5);

        let opened = handle(
            &mut ledger,
            &mut rng,
            "Erin",
            MIN_BALANCE,
            "1990-01-01",
            None,
        )
        .unwrap();

        assert_eq!(ledger.get(&opened.number).unwrap().balance, MIN_BALANCE);
    }

    #[test]
    fn rejects_holders_outside_the_age_range() {
        let mut ledger = Ledger::new();
        let mut rng = StdRng::seed_from_u64(6);

        for dob in [dob_with_age(10), dob_with_age(17), dob_with_age(81)] {
            let err = handle(&mut ledger, &mut rng, "Kid", Money::new(500), &dob, None)
                .unwrap_err();
            assert!(matches!(err, BankError::InvalidAge));
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn accepts_holders_at_the_age_bounds() {
        let mut ledger = Ledger::new();
        let mut rng = StdRng::seed_from_u64(7);

        for dob in [dob_with_age(18), dob_with_age(80)] {
            handle(&mut ledger, &mut rng, "Edge", Money::new(500), &dob, None).unwrap();
        }
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn rejects_malformed_dates_of_birth() {
        let mut ledger = Ledger::new();
        let mut rng = StdRng::seed_from_u64(8);

        for dob in ["31-12-2000", "1995/05/12", "not-a-date", ""] {
            let err = handle(&mut ledger, &mut rng, "Eve", Money::new(500), dob, None)
                .unwrap_err();
            assert!(matches!(err, BankError::InvalidDateFormat));
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn rejects_opening_once_the_registry_is_full() {
        let mut ledger = Ledger::new();
        let dob = chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let opened_at = dob.and_hms_opt(12, 0, 0).unwrap();
        for i in 0..MAX_ACCOUNTS {
            ledger.insert(
                format!("{:010}", i),
                Account::open("Holder", Money::new(100), dob, 1234, opened_at),
            );
        }

        let mut rng = StdRng::seed_from_u64(9);
        let err = handle(
            &mut ledger,
            &mut rng,
            "Late",
            Money::new(500),
            "1990-01-01",
            None,
        )
        .unwrap_err();

        assert!(matches!(err, BankError::Limit));
        assert_eq!(ledger.len(), MAX_ACCOUNTS);
    }

    #[test]
    fn age_counts_completed_years_only() {
        let dob = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();

        // the day before the birthday the year does not count yet
        let before = NaiveDate::from_ymd_opt(2020, 6, 14).unwrap();
        assert_eq!(age_on(dob, before), 19);

        let on = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
        assert_eq!(age_on(dob, on), 20);

        let after = NaiveDate::from_ymd_opt(2020, 6, 16).unwrap();
        assert_eq!(age_on(dob, after), 20);
    }
}
