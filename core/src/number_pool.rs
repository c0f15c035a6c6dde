//! # Number Pool
//!
//! Produces fresh tickets from an injectable randomness source.
//!
//! Production code draws from [`RandomSource`], a thin wrapper over any `rand`
//! generator. Tests can plug in a seeded generator or a scripted source to make
//! every draw reproducible.

use std::ops::RangeInclusive;

use lotto_common::error::LottoError;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::index;

use crate::ticket::{MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET, Ticket};

/// Supplies the raw numbers a ticket is built from.
pub trait NumberSource {
    /// Returns `amount` distinct values taken uniformly from `range`.
    fn pick_unique(&mut self, range: RangeInclusive<u8>, amount: usize) -> Vec<u8>;
}

/// [`NumberSource`] backed by a `rand` generator.
pub struct RandomSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource<ThreadRng> {
    pub fn from_thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> NumberSource for RandomSource<R> {
    fn pick_unique(&mut self, range: RangeInclusive<u8>, amount: usize) -> Vec<u8> {
        let start = *range.start();
        let span = usize::from(range.end().saturating_sub(start)) + 1;

        index::sample(&mut self.rng, span, amount.min(span))
            .into_iter()
            .map(|offset| start + offset as u8)
            .collect()
    }
}

/// Generates one valid ticket per call.
pub struct NumberPool {
    source: Box<dyn NumberSource>,
}

impl NumberPool {
    pub fn new(source: Box<dyn NumberSource>) -> Self {
        Self { source }
    }

    /// Pool drawing from the thread-local generator, or from a seeded one when
    /// `seed` is given.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(Box::new(RandomSource::seeded(seed))),
            None => Self::new(Box::new(RandomSource::from_thread())),
        }
    }

    /// Draws six distinct numbers in `1..=45` and returns them as a sorted ticket.
    ///
    /// Only fails when the source hands back numbers that do not form a ticket.
    pub fn generate(&mut self) -> Result<Ticket, LottoError> {
        let numbers = self
            .source
            .pick_unique(MIN_NUMBER..=MAX_NUMBER, NUMBERS_PER_TICKET);
        Ticket::new(&numbers)
    }
}
