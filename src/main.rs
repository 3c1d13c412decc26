use clap::{Parser, Subcommand};
use wktlib::cli_commands;

/// Inspect and convert geometries in Well-Known Text form
#[derive(Parser)]
#[command(name = "wktlib", about = "Well-Known Text geometry codec")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a WKT string and describe the geometry it contains
    Describe { wkt: String },
    /// Parse a WKT string and print it back in canonical form
    Normalize {
        wkt: String,
        /// Optional path to save the canonical text to
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Describe { wkt } => cli_commands::parse_show_detail(wkt),
        Command::Normalize { wkt, output } => cli_commands::normalize_wkt(wkt, output),
    };
    if let Err(msg) = result {
        eprintln!("{msg}");
        std::process::exit(1);
    }
}
