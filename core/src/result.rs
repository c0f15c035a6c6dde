//! # Profit Rate
//!
//! Turns a prize tally into the percentage of money returned.
//!
//! The rate is computed with integer arithmetic and rounded half up, so
//! `62.5` comes out as `62.5` and not `62.499999`.

use lotto_common::error::LottoError;

use crate::prize::PrizeTally;

pub const MAX_PRECISION: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct ResultCalculator {
    precision: usize,
}

impl Default for ResultCalculator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ResultCalculator {
    /// `precision` is clamped to `1..=MAX_PRECISION` decimal places.
    pub fn new(precision: usize) -> Self {
        Self {
            precision: precision.clamp(1, MAX_PRECISION),
        }
    }

    /// `total prize / money spent * 100`, formatted with the configured number
    /// of decimals.
    pub fn profit_rate(&self, tally: &PrizeTally, money_spent: u64) -> Result<String, LottoError> {
        if money_spent == 0 {
            return Err(LottoError::NothingSpent);
        }

        let scale = 10u128.pow(self.precision as u32);
        let spent = u128::from(money_spent);
        let scaled = tally.total_prize() * 100 * scale;
        let rounded = (scaled * 2 + spent) / (spent * 2);

        Ok(format!(
            "{}.{:0width$}",
            rounded / scale,
            rounded % scale,
            width = self.precision
        ))
    }
}
