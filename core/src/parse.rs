//! Turns raw input lines into domain values.
//!
//! Only validation happens here; prompting again after an error is up to the caller.

use lotto_common::error::LottoError;

use crate::draw::WinningDraw;
use crate::store::TICKET_PRICE;
use crate::ticket::{Ticket, check_range};

pub fn parse_integer(input: &str) -> Result<i64, LottoError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| LottoError::NotANumber(trimmed.to_string()))
}

/// Purchase amount. Negative amounts are reported as below the minimum.
pub fn parse_money(input: &str) -> Result<u64, LottoError> {
    let amount = parse_integer(input)?;
    u64::try_from(amount).map_err(|_| LottoError::BelowMinimum {
        amount,
        minimum: TICKET_PRICE,
    })
}

pub fn parse_winning_numbers(input: &str) -> Result<Ticket, LottoError> {
    input.parse()
}

/// Pairs an already parsed winning ticket with the bonus number in `input`.
pub fn parse_bonus(input: &str, winning: &Ticket) -> Result<WinningDraw, LottoError> {
    let bonus = check_range(parse_integer(input)?)?;
    WinningDraw::new(winning.clone(), bonus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_input() {
        assert_eq!(parse_money(" 14000\n"), Ok(14_000));
        assert_eq!(parse_money("abc"), Err(LottoError::NotANumber("abc".into())));
        assert_eq!(
            parse_money("-1000"),
            Err(LottoError::BelowMinimum { amount: -1000, minimum: 1000 })
        );
    }

    #[test]
    fn winning_numbers_input() {
        let ticket = parse_winning_numbers("1,2,3,4,5,6").unwrap();
        assert_eq!(ticket.numbers(), &[1, 2, 3, 4, 5, 6]);
        assert!(matches!(
            parse_winning_numbers("1,1,2,3,4,5"),
            Err(LottoError::DuplicateNumber(1))
        ));
    }

    #[test]
    fn bonus_input() {
        let winning = parse_winning_numbers("1,2,3,4,5,6").unwrap();

        assert_eq!(parse_bonus("7", &winning).unwrap().bonus(), 7);
        assert_eq!(parse_bonus("6", &winning), Err(LottoError::InvalidBonus(6)));
        assert!(matches!(
            parse_bonus("99", &winning),
            Err(LottoError::OutOfRange { value: 99, .. })
        ));
        assert!(matches!(
            parse_bonus("seven", &winning),
            Err(LottoError::NotANumber(_))
        ));
    }
}
