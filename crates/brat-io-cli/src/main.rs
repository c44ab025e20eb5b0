//! brat-io CLI - inspect, normalize and re-chunk brat corpora.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Inspect {
            text,
            annotations,
            delimiter,
            json,
        } => commands::inspect::run(text, annotations, delimiter, json, cli.verbose),

        Commands::Normalize {
            input,
            output,
            delimiter,
        } => commands::normalize::run(input, output, delimiter, cli.verbose),

        Commands::Rechunk {
            input,
            output,
            size,
            prefix,
            delimiter,
            recursive,
            config,
            visual,
        } => commands::rechunk::run(
            commands::rechunk::RechunkArgs {
                input,
                output,
                size,
                prefix,
                delimiter,
                recursive,
                config,
                visual,
            },
            cli.verbose,
        ),

        Commands::Schema {
            input,
            output,
            delimiter,
            recursive,
        } => commands::schema::run(input, output, delimiter, recursive, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log warnings by default, debug output with `--verbose`; `RUST_LOG` wins.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
