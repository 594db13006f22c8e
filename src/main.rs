use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use bujo::cli::args::{Cli, Commands, ConfigCommands};
use bujo::cli::commands;
use bujo::config::Config;
use bujo::error::BujoError;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "BUJO_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(verbose))),
        )
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

const fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "bujo=warn",
        1 => "bujo=debug",
        _ => "bujo=trace",
    }
}

fn run(cli: Cli) -> Result<(), BujoError> {
    // init must work even when the existing file no longer parses
    if let Commands::Config(args) = &cli.command {
        if let ConfigCommands::Init { .. } = args.command {
            let format = cli.output.unwrap_or_default();
            println!("{}", commands::config(&args.command, &Config::default(), format)?);
            return Ok(());
        }
    }

    let config = Config::load()?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match &cli.command {
        Commands::Parse(args) => commands::parse_lines(args, format)?,
        Commands::Lex(args) => commands::lex_line(args, format)?,
        Commands::Config(args) => commands::config(&args.command, &config, format)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
