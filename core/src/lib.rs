//! # Lotto Core
//!
//! Ticket issuing and prize evaluation for a 6/45 lottery.
//!
//! Data flows one way through the session:
//!
//! * [`store::Store`] validates the money and issues tickets from a
//!   [`number_pool::NumberPool`].
//! * [`customer::Customer`] holds the batch.
//! * [`checker::Checker`] ranks it against a [`draw::WinningDraw`] into a
//!   [`prize::PrizeTally`].
//! * [`result::ResultCalculator`] turns the tally into a profit rate.
//!
//! [`game::GameService`] wires these together for one session. Nothing here
//! prints or reads from the terminal.

pub mod checker;
pub mod customer;
pub mod draw;
pub mod game;
pub mod number_pool;
pub mod parse;
pub mod prize;
pub mod result;
pub mod store;
pub mod ticket;
