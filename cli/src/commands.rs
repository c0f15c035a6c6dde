pub mod play;
pub mod prizes;

use clap::{Args, Parser, Subcommand};
use lotto_common::config::DEFAULT_PRECISION;

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "A 6/45 lottery simulator.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print less; repeat to also hide the ticket list
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Buy tickets and check them against a winning draw
    #[command(alias = "p")]
    Play(PlayArgs),
    /// Show the prize table
    #[command(alias = "t")]
    Prizes,
}

#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Purchase amount; prompted for when omitted
    #[arg(short, long, allow_hyphen_values = true)]
    pub money: Option<String>,

    /// Winning numbers such as "1,2,3,4,5,6"; prompted for when omitted
    #[arg(short, long)]
    pub winning: Option<String>,

    /// Bonus number; prompted for when omitted
    #[arg(short, long, allow_hyphen_values = true)]
    pub bonus: Option<String>,

    /// Seed the ticket generator for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Decimal places of the profit rate
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
