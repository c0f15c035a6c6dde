//! # Lottery Ticket
//!
//! A ticket is six distinct numbers between 1 and 45, kept in ascending order.
//! The same type doubles as the winning numbers of a draw.

use std::fmt;
use std::str::FromStr;

use lotto_common::error::LottoError;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;
pub const NUMBERS_PER_TICKET: usize = 6;

/// Immutable, validated set of lottery numbers.
///
/// Two tickets are equal when they hold the same numbers, whatever order they
/// were built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticket {
    numbers: [u8; NUMBERS_PER_TICKET],
}

impl Ticket {
    /// Builds a ticket from any ordering of six numbers.
    ///
    /// Fails with [`LottoError::WrongCount`], [`LottoError::OutOfRange`] or
    /// [`LottoError::DuplicateNumber`], checked in that order.
    pub fn new(numbers: &[u8]) -> Result<Self, LottoError> {
        if numbers.len() != NUMBERS_PER_TICKET {
            return Err(LottoError::WrongCount {
                expected: NUMBERS_PER_TICKET,
                actual: numbers.len(),
            });
        }

        for &number in numbers {
            check_range(i64::from(number))?;
        }

        let mut sorted = [0u8; NUMBERS_PER_TICKET];
        sorted.copy_from_slice(numbers);
        sorted.sort_unstable();

        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(LottoError::DuplicateNumber(pair[0]));
        }

        Ok(Self { numbers: sorted })
    }

    /// The numbers in ascending order.
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// How many numbers the two tickets share (0 to 6).
    pub fn match_count(&self, other: &Ticket) -> usize {
        self.numbers
            .iter()
            .filter(|number| other.contains(**number))
            .count()
    }
}

/// Narrows a raw integer to a lottery number.
pub fn check_range(value: i64) -> Result<u8, LottoError> {
    match u8::try_from(value) {
        Ok(number) if (MIN_NUMBER..=MAX_NUMBER).contains(&number) => Ok(number),
        _ => Err(LottoError::OutOfRange {
            value,
            min: MIN_NUMBER,
            max: MAX_NUMBER,
        }),
    }
}

impl FromStr for Ticket {
    type Err = LottoError;

    /// Parses comma separated numbers such as `"1, 2, 3, 4, 5, 6"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numbers = s
            .split(',')
            .map(|token| {
                let token = token.trim();
                let value = token
                    .parse::<i64>()
                    .map_err(|_| LottoError::NotANumber(token.to_string()))?;
                check_range(value)
            })
            .collect::<Result<Vec<u8>, LottoError>>()?;

        Ticket::new(&numbers)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .numbers
            .iter()
            .map(u8::to_string)
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "[{joined}]")
    }
}
