pub const DEFAULT_PRECISION: usize = 1;

pub struct Config {
    /// Skips the banner line at startup.
    pub no_banner: bool,
    /// 0 prints everything, 1 drops headers, 2 also drops the ticket listing.
    pub quiet: u8,
    /// Seeds the number source so a session can be replayed.
    ///
    /// `None` draws from the thread-local generator.
    pub seed: Option<u64>,
    /// Decimal places of the profit rate. Values below 1 are raised to 1.
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            seed: None,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    pub fn precision(&self) -> usize {
        self.precision.max(1)
    }
}
