mod commands;
mod output;
mod record;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nivo",
    version,
    about = "Avalanche risk bulletin resolver for the Romanian Carpathians"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the bulletin PDF and write its normalized text
    Fetch {
        /// Bulletin URL
        #[arg(long, default_value = commands::fetch::DEFAULT_BULLETIN_URL)]
        url: String,

        /// Output text file
        #[arg(short = 'O', long = "out", value_name = "FILE", default_value = "bulletin.txt")]
        out: PathBuf,

        /// Also keep the downloaded PDF at this path
        #[arg(long, value_name = "FILE")]
        keep_pdf: Option<PathBuf>,
    },
    /// Resolve per-massif risk levels from a bulletin (PDF or text file)
    Resolve {
        /// Path to a bulletin PDF or extracted text file
        input_file: PathBuf,

        /// Custom registry JSON (defaults to the builtin registry)
        #[arg(short, long, value_name = "FILE")]
        registry: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the bulletin record to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Source tag recorded in the output (defaults to the input path)
        #[arg(long)]
        source: Option<String>,
    },
    /// Inspect and validate massif registries
    Massifs {
        #[command(subcommand)]
        action: MassifsAction,
    },
}

#[derive(Subcommand)]
enum MassifsAction {
    /// List massifs in the builtin registry
    List,
    /// Validate a custom registry file
    Validate {
        /// Path to a registry JSON file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch { url, out, keep_pdf } => commands::fetch::run(&url, out, keep_pdf),
        Commands::Resolve {
            input_file,
            registry,
            output,
            out,
            source,
        } => commands::resolve::run(input_file, registry, &output, out, source),
        Commands::Massifs { action } => match action {
            MassifsAction::List => commands::massifs::list(),
            MassifsAction::Validate { file } => commands::massifs::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
