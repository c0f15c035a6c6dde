use std::io::{self, BufRead};

use colored::*;
use lotto_common::config::Config;
use lotto_core::draw::WinningDraw;
use lotto_core::game::{GameReport, GameService};
use lotto_core::number_pool::NumberPool;
use lotto_core::parse::{parse_bonus, parse_money, parse_winning_numbers};
use lotto_core::prize::{PrizeTally, PrizeTier};
use lotto_core::result::ResultCalculator;
use lotto_core::ticket::Ticket;
use tracing::debug;

use crate::commands::PlayArgs;
use crate::lprint;
use crate::terminal::messages::{MessageKey, Messages};
use crate::terminal::{colors, format, input, print};

pub fn play(args: PlayArgs, cfg: &Config, messages: &Messages) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    run(&mut reader, args, cfg, messages).map(|_| ())
}

/// One full session. Values missing from `args` are read from `reader`.
pub fn run<R: BufRead>(
    reader: &mut R,
    args: PlayArgs,
    cfg: &Config,
    messages: &Messages,
) -> anyhow::Result<GameReport> {
    let mut game = GameService::new(
        NumberPool::from_seed(cfg.seed),
        ResultCalculator::new(cfg.precision()),
    );
    debug!(seed = ?cfg.seed, "starting session");

    let tickets: Vec<Ticket> = match args.money.as_deref() {
        Some(raw) => game.purchase(parse_money(raw)?)?,
        None => input::prompt_until(reader, &messages.render(MessageKey::AskMoney, &[]), |line| {
            game.purchase(parse_money(line)?)
        })?,
    };
    show_tickets(&tickets, cfg, messages);

    let draw = read_draw(reader, &args, cfg, messages)?;
    let report = game.settle(&draw)?;

    show_report(&report, cfg, messages);
    Ok(report)
}

fn read_draw<R: BufRead>(
    reader: &mut R,
    args: &PlayArgs,
    cfg: &Config,
    messages: &Messages,
) -> anyhow::Result<WinningDraw> {
    print::header("the draw", cfg.quiet);

    let winning: Ticket = match args.winning.as_deref() {
        Some(raw) => parse_winning_numbers(raw)?,
        None => input::prompt_until(
            reader,
            &messages.render(MessageKey::AskWinningNumbers, &[]),
            parse_winning_numbers,
        )?,
    };

    let draw = match args.bonus.as_deref() {
        Some(raw) => parse_bonus(raw, &winning)?,
        None => input::prompt_until(reader, &messages.render(MessageKey::AskBonus, &[]), |line| {
            parse_bonus(line, &winning)
        })?,
    };

    Ok(draw)
}

fn show_tickets(tickets: &[Ticket], cfg: &Config, messages: &Messages) {
    print::header("your tickets", cfg.quiet);
    print::print_status(messages.render(
        MessageKey::Purchased,
        &[("count", tickets.len().to_string())],
    ));

    if cfg.quiet >= 2 {
        return;
    }
    for ticket in tickets {
        lprint!(&ticket.to_string());
    }
}

fn show_report(report: &GameReport, cfg: &Config, messages: &Messages) {
    if cfg.quiet == 0 {
        lprint!();
    }
    print::header(&messages.render(MessageKey::Statistics, &[]), cfg.quiet);

    for (tier, line) in tally_lines(&report.tally, messages) {
        let colored_line: ColoredString = if report.tally.count(tier) > 0 {
            line.color(colors::WIN)
        } else {
            line.color(colors::TEXT_DEFAULT)
        };
        lprint!(&colored_line.to_string());
    }

    let won = report.tally.total_prize() >= u128::from(report.money_spent);
    let rate: ColoredString = report
        .profit_rate
        .as_str()
        .bold()
        .color(if won { colors::WIN } else { colors::LOSS });
    let summary: String = messages.render(MessageKey::ProfitRate, &[("rate", rate.to_string())]);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&summary);
            print::end_of_program();
        }
        _ => {
            lprint!(&summary);
        }
    }
}

/// One plain line per reported tier, cheapest tier first.
pub fn tally_lines(tally: &PrizeTally, messages: &Messages) -> Vec<(PrizeTier, String)> {
    tally
        .reported()
        .map(|(tier, count)| {
            let key = if tier.requires_bonus() {
                MessageKey::TierLineWithBonus
            } else {
                MessageKey::TierLine
            };
            let line = messages.render(
                key,
                &[
                    ("matches", tier.match_count().to_string()),
                    ("payout", format::with_thousands(tier.payout())),
                    ("count", count.to_string()),
                ],
            );
            (tier, line)
        })
        .collect()
}
