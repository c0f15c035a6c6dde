//! # Game Service
//!
//! Runs one purchase session: money in, tickets out, then the draw is checked
//! and the profit rate computed.
//!
//! The service owns its store, customer, checker and calculator. Sessions
//! never share state.

use lotto_common::error::LottoError;
use tracing::debug;

use crate::checker::Checker;
use crate::customer::Customer;
use crate::draw::WinningDraw;
use crate::number_pool::NumberPool;
use crate::prize::PrizeTally;
use crate::result::ResultCalculator;
use crate::store::{Store, TICKET_PRICE};
use crate::ticket::Ticket;

/// Everything the display layer needs once a session is settled.
#[derive(Debug, Clone)]
pub struct GameReport {
    pub tickets: Vec<Ticket>,
    pub tally: PrizeTally,
    pub money_spent: u64,
    pub profit_rate: String,
}

pub struct GameService {
    store: Store,
    customer: Customer,
    checker: Checker,
    calculator: ResultCalculator,
}

impl GameService {
    pub fn new(pool: NumberPool, calculator: ResultCalculator) -> Self {
        Self {
            store: Store::new(pool),
            customer: Customer::new(),
            checker: Checker::new(),
            calculator,
        }
    }

    /// Spends `amount` on tickets and returns the batch handed to the customer.
    ///
    /// A rejected amount leaves the session ready for another attempt.
    pub fn purchase(&mut self, amount: u64) -> Result<Vec<Ticket>, LottoError> {
        self.customer.insert_money(&mut self.store, amount);
        self.store.validate_money()?;

        let batch = self.store.issue_tickets()?;
        self.customer.receive_tickets(batch);

        Ok(self.customer.list_tickets())
    }

    /// Checks the purchased tickets against `draw`.
    ///
    /// Fails with [`LottoError::MoneyNotValidated`] if nothing was purchased yet.
    pub fn settle(&self, draw: &WinningDraw) -> Result<GameReport, LottoError> {
        let money_spent = self.store.ticket_count()? * TICKET_PRICE;
        let tally = self.customer.request_check(&self.checker, draw);
        let profit_rate = self.calculator.profit_rate(&tally, money_spent)?;

        debug!(money_spent, %profit_rate, "session settled");

        Ok(GameReport {
            tickets: self.customer.list_tickets(),
            tally,
            money_spent,
            profit_rate,
        })
    }
}
