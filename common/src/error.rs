//! # Validation Errors
//!
//! Every failure the lottery core can raise. All of them stem from user input and
//! are recoverable by asking for the value again.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LottoError {
    #[error("[ERROR] purchase amount must be at least {minimum}, got {amount}")]
    BelowMinimum { amount: i64, minimum: u64 },

    #[error("[ERROR] purchase amount must be a multiple of {unit}, got {amount}")]
    NotDivisible { amount: u64, unit: u64 },

    #[error("[ERROR] a ticket holds exactly {expected} numbers, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("[ERROR] number {0} appears more than once")]
    DuplicateNumber(u8),

    #[error("[ERROR] number {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: u8, max: u8 },

    #[error("[ERROR] bonus number {0} is already one of the winning numbers")]
    InvalidBonus(u8),

    #[error("[ERROR] '{0}' is not a number")]
    NotANumber(String),

    #[error("[ERROR] purchase amount has not been validated yet")]
    MoneyNotValidated,

    #[error("[ERROR] no money was spent, profit rate is undefined")]
    NothingSpent,
}
