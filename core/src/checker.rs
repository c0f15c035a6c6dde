//! # Prize Checker
//!
//! Ranks every ticket of a batch against a winning draw.

use tracing::debug;

use crate::draw::WinningDraw;
use crate::prize::{PrizeTally, PrizeTier};
use crate::ticket::Ticket;

#[derive(Debug, Default, Clone, Copy)]
pub struct Checker;

impl Checker {
    pub fn new() -> Self {
        Self
    }

    /// Tier of a single ticket. The bonus ball only counts alongside five
    /// matching numbers.
    pub fn rank(&self, ticket: &Ticket, draw: &WinningDraw) -> PrizeTier {
        let matched = ticket.match_count(draw.ticket());
        let bonus_match = matched == 5 && ticket.contains(draw.bonus());
        PrizeTier::rank(matched, bonus_match)
    }

    /// Counts how many tickets fall into each tier, misses included.
    pub fn evaluate(&self, tickets: &[Ticket], draw: &WinningDraw) -> PrizeTally {
        let tally: PrizeTally = tickets.iter().map(|ticket| self.rank(ticket, draw)).collect();

        debug!(
            tickets = tickets.len(),
            misses = tally.count(PrizeTier::Miss),
            "checked tickets against the winning draw"
        );

        tally
    }
}
