//! Types shared between the lottery core and its terminal front end.

pub mod config;
pub mod error;
