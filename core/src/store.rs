//! # Ticket Store
//!
//! Takes the customer's money, checks it, and prints one ticket per 1000 units.
//!
//! Money is accepted and validated in two separate steps so the caller can
//! re-collect input between them. Nothing is issued until validation passed.

use lotto_common::error::LottoError;
use tracing::debug;

use crate::number_pool::NumberPool;
use crate::ticket::Ticket;

pub const TICKET_PRICE: u64 = 1000;

pub struct Store {
    pool: NumberPool,
    money: u64,
    validated: bool,
}

impl Store {
    pub fn new(pool: NumberPool) -> Self {
        Self {
            pool,
            money: 0,
            validated: false,
        }
    }

    /// Stores the raw amount. Any earlier validation is discarded.
    pub fn receive_money(&mut self, amount: u64) {
        self.money = amount;
        self.validated = false;
    }

    pub fn money(&self) -> u64 {
        self.money
    }

    pub fn validate_money(&mut self) -> Result<u64, LottoError> {
        if self.money < TICKET_PRICE {
            return Err(LottoError::BelowMinimum {
                amount: self.money as i64,
                minimum: TICKET_PRICE,
            });
        }
        if self.money % TICKET_PRICE != 0 {
            return Err(LottoError::NotDivisible {
                amount: self.money,
                unit: TICKET_PRICE,
            });
        }

        self.validated = true;
        Ok(self.money)
    }

    pub fn ticket_count(&self) -> Result<u64, LottoError> {
        if !self.validated {
            return Err(LottoError::MoneyNotValidated);
        }
        Ok(self.money / TICKET_PRICE)
    }

    /// Generates [`Store::ticket_count`] independent tickets. The same numbers
    /// may come up on more than one ticket.
    pub fn issue_tickets(&mut self) -> Result<Vec<Ticket>, LottoError> {
        let count = self.ticket_count()?;
        let tickets = (0..count)
            .map(|_| self.pool.generate())
            .collect::<Result<Vec<Ticket>, LottoError>>()?;

        debug!(count, money = self.money, "issued tickets");
        Ok(tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number_pool::tests::ScriptedSource;
    use proptest::prelude::*;

    fn store() -> Store {
        Store::new(NumberPool::from_seed(Some(3)))
    }

    #[test]
    fn fourteen_thousand_buys_fourteen() {
        let mut store = store();
        store.receive_money(14_000);
        store.validate_money().unwrap();
        assert_eq!(store.ticket_count(), Ok(14));
        assert_eq!(store.issue_tickets().unwrap().len(), 14);
    }

    #[test]
    fn below_minimum() {
        let mut store = store();
        store.receive_money(999);
        assert_eq!(
            store.validate_money(),
            Err(LottoError::BelowMinimum { amount: 999, minimum: 1000 })
        );

        store.receive_money(0);
        assert!(matches!(
            store.validate_money(),
            Err(LottoError::BelowMinimum { .. })
        ));
    }

    #[test]
    fn not_divisible() {
        let mut store = store();
        store.receive_money(1500);
        assert_eq!(
            store.validate_money(),
            Err(LottoError::NotDivisible { amount: 1500, unit: 1000 })
        );
    }

    #[test]
    fn issuing_requires_validation() {
        let mut store = store();
        store.receive_money(5000);
        assert_eq!(store.ticket_count(), Err(LottoError::MoneyNotValidated));
        assert_eq!(store.issue_tickets(), Err(LottoError::MoneyNotValidated));
    }

    #[test]
    fn new_money_resets_validation() {
        let mut store = store();
        store.receive_money(5000);
        store.validate_money().unwrap();
        store.receive_money(1500);
        assert_eq!(store.ticket_count(), Err(LottoError::MoneyNotValidated));
        assert_eq!(store.money(), 1500);
    }

    #[test]
    fn repeated_tickets_are_allowed() {
        let same = vec![1, 2, 3, 4, 5, 6];
        let mut store = Store::new(NumberPool::new(Box::new(ScriptedSource::new(vec![
            same.clone(),
            same,
        ]))));
        store.receive_money(2000);
        store.validate_money().unwrap();

        let tickets = store.issue_tickets().unwrap();
        assert_eq!(tickets[0], tickets[1]);
    }

    proptest! {
        #[test]
        fn prop_ticket_count_is_money_over_price(units in 1u64..2_000) {
            let mut store = store();
            store.receive_money(units * TICKET_PRICE);
            prop_assert_eq!(store.validate_money(), Ok(units * TICKET_PRICE));
            prop_assert_eq!(store.ticket_count(), Ok(units));
        }

        #[test]
        fn prop_small_amounts_are_below_minimum(amount in 0u64..TICKET_PRICE) {
            let mut store = store();
            store.receive_money(amount);
            let is_below_minimum = matches!(
                store.validate_money(),
                Err(LottoError::BelowMinimum { .. })
            );
            prop_assert!(is_below_minimum);
        }

        #[test]
        fn prop_uneven_amounts_are_not_divisible(
            units in 1u64..1_000_000,
            remainder in 1u64..TICKET_PRICE,
        ) {
            let mut store = store();
            store.receive_money(units * TICKET_PRICE + remainder);
            let is_not_divisible = matches!(
                store.validate_money(),
                Err(LottoError::NotDivisible { .. })
            );
            prop_assert!(is_not_divisible);
        }
    }
}
