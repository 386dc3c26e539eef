use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod matching;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("dice_overlap=debug,info")
    } else {
        EnvFilter::new("dice_overlap=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let config = cli.dice_config()?;

    match cli.command {
        cli::Commands::Split(args) => {
            cli::split::run(args, cli.format, config)?;
        }
        cli::Commands::Coefficient(args) => {
            cli::coefficient::run(args, cli.format, config)?;
        }
        cli::Commands::Overlap(args) => {
            cli::overlap::run(args, cli.format, config, cli.verbose)?;
        }
    }

    Ok(())
}
