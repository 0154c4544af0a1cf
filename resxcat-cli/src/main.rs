mod sync;
mod validation;
mod view;

use clap::{Parser, Subcommand};

use crate::sync::{SyncOptions, run_sync_command};
use crate::view::run_view_command;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export .resx resource documents to per-locale JSON files.
    Sync {
        /// Directory containing the .resx resource documents
        #[arg(short, long)]
        resources: String,

        /// Directory to write the <locale>.json files to
        #[arg(short, long)]
        output: String,

        /// Comma-separated list of locale codes to export
        #[arg(short, long, value_delimiter = ',', default_value = "en,hi,gu")]
        langs: Vec<String>,

        /// Base name of the resource documents
        #[arg(long, default_value = "SharedResource")]
        base_name: String,

        /// Optional path to write a JSON export report to
        #[arg(long)]
        report_json: Option<String>,

        /// Report what would be exported without writing any JSON files
        #[arg(long)]
        dry_run: bool,
    },

    /// View the entries of a single .resx document.
    View {
        /// The input file to view
        #[arg(short, long)]
        input: String,

        /// Display full values without truncation
        #[arg(long)]
        full: bool,
    },
}

fn main() {
    let args = Args::parse();

    match args.commands {
        Commands::Sync {
            resources,
            output,
            langs,
            base_name,
            report_json,
            dry_run,
        } => {
            let options = SyncOptions {
                resources,
                output,
                langs,
                base_name,
                report_json,
                dry_run,
            };
            if let Err(e) = run_sync_command(options) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::View { input, full } => {
            if let Err(e) = run_view_command(&input, full) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
