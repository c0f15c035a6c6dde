mod commands;
mod terminal;

use commands::{CommandLine, Commands, play, prizes};
use lotto_common::config::Config;
use terminal::messages::Messages;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let mut cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        ..Config::default()
    };
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Play(args) => {
            cfg.seed = args.seed;
            cfg.precision = args.precision;
            play::play(args, &cfg, &Messages::default())
        }
        Commands::Prizes => {
            prizes::prizes(&cfg);
            Ok(())
        }
    }
}
