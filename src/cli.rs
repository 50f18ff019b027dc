use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "edsmap")]
#[command(
    version,
    about = "EDS Mapper - Recognize design-system components in design exports",
    long_about = "EDS Mapper (edsmap)\n\nModes:\n- map: run the full pipeline (components, style tokens, pages, layouts, form patterns).\n- classify: component recognition only.\n- tokens: style token aggregation only.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set traversal depth, token frequency thresholds and pattern spacing; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full mapping pipeline over a design export
    Map {
        #[arg(help = "Design document exported as JSON")]
        input: PathBuf,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Recognize components without aggregating tokens or layout
    Classify {
        #[arg(help = "Design document exported as JSON")]
        input: PathBuf,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Aggregate style tokens without emitting the component tree
    Tokens {
        #[arg(help = "Design document exported as JSON")]
        input: PathBuf,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}
