use lotto_common::error::LottoError;

use crate::ticket::{Ticket, check_range};

/// Winning numbers of a round plus the bonus ball.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningDraw {
    ticket: Ticket,
    bonus: u8,
}

impl WinningDraw {
    /// Fails with [`LottoError::OutOfRange`] for a bonus outside `1..=45` and with
    /// [`LottoError::InvalidBonus`] when the bonus is already a winning number.
    pub fn new(ticket: Ticket, bonus: u8) -> Result<Self, LottoError> {
        let bonus = check_range(i64::from(bonus))?;
        if ticket.contains(bonus) {
            return Err(LottoError::InvalidBonus(bonus));
        }
        Ok(Self { ticket, bonus })
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn bonus(&self) -> u8 {
        self.bonus
    }
}
