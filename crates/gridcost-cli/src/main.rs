//! Minimum path sum from the top-left cell of a grid to its last column.
//!
//! Run: cargo run --bin gridcost

use std::io;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use env_logger::{Builder, Target};
use gridcost_cli::{Options, OutputFormat};
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "gridcost",
    about = "Reads R, C and an R×C grid of costs from stdin and prints the minimum path sum to the last column"
)]
struct Args {
    /// Do not print input prompts
    #[arg(long)]
    no_prompt: bool,
    /// Also print the cells of the cheapest path
    #[arg(long)]
    show_path: bool,
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    let opts = Options {
        // JSON output stays machine-readable.
        prompt: !args.no_prompt && matches!(args.format, FormatArg::Text),
        show_path: args.show_path,
        format: args.format.into(),
    };

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    match gridcost_cli::run(stdin, &mut stdout, &opts) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
