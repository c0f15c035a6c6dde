use colored::*;
use lotto_common::config::Config;
use lotto_core::prize::PrizeTier;
use lotto_core::store::TICKET_PRICE;

use crate::terminal::{colors, format, print};

const KEY_WIDTH: usize = 4;

pub fn prizes(cfg: &Config) {
    print::header("prize table", cfg.quiet);

    for tier in PrizeTier::REPORTED.iter().rev() {
        let rule: String = if tier.requires_bonus() {
            format!("{} numbers + bonus", tier.match_count())
        } else {
            format!("{} numbers", tier.match_count())
        };
        let payout: ColoredString = format::with_thousands(tier.payout()).color(colors::ACCENT);

        print::aligned_line(
            format::tier_name(*tier),
            format!("{rule:<18}{payout}"),
            KEY_WIDTH,
        );
    }

    print::aligned_line(
        "cost",
        format!("{} per ticket", format::with_thousands(TICKET_PRICE)),
        KEY_WIDTH,
    );
}
