mod cli;
mod platform;

use clap::Parser;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    if !cloner_logging::initialize(&args.log_destination(), LevelFilter::Info) {
        eprintln!("Warning: logging is disabled for this session.");
    }

    platform::run_app(args.app_config())
}
