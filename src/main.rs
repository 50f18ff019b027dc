mod cli;
mod commands;
mod formatting;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_classify, run_map, run_tokens};

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Map {
            input,
            format,
            output,
        } => run_map(args.config, input, format, output),
        Commands::Classify {
            input,
            format,
            output,
        } => run_classify(args.config, input, format, output),
        Commands::Tokens {
            input,
            format,
            output,
        } => run_tokens(args.config, input, format, output),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}
