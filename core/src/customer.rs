use crate::checker::Checker;
use crate::draw::WinningDraw;
use crate::prize::PrizeTally;
use crate::store::Store;
use crate::ticket::Ticket;

/// Holds the tickets bought in one session.
#[derive(Debug, Default)]
pub struct Customer {
    tickets: Vec<Ticket>,
}

impl Customer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_money(&self, store: &mut Store, amount: u64) {
        store.receive_money(amount);
    }

    pub fn receive_tickets(&mut self, batch: Vec<Ticket>) {
        self.tickets = batch;
    }

    /// A copy of the held tickets; changing it leaves the customer untouched.
    pub fn list_tickets(&self) -> Vec<Ticket> {
        self.tickets.clone()
    }

    pub fn request_check(&self, checker: &Checker, draw: &WinningDraw) -> PrizeTally {
        checker.evaluate(&self.tickets, draw)
    }
}
