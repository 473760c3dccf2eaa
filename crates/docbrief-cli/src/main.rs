mod commands;
mod output;
mod web;

use clap::{Parser, Subcommand};
use docbrief_core::config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "docbrief",
    version,
    about = "Summarize company documents (PDF or DOCX) with a language model"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the browser UI
    Serve {
        /// Address to listen on (default: DOCBRIEF_BIND or 127.0.0.1:8501)
        #[arg(short, long)]
        bind: Option<String>,

        /// Custom JSON summary profile
        #[arg(short, long, value_name = "FILE")]
        profile: Option<PathBuf>,
    },
    /// Summarize a local PDF or DOCX and write the Word report
    Summarize {
        /// Path to PDF or DOCX file
        input_file: PathBuf,

        /// Where to write the Word report
        #[arg(short = 'O', long = "out", value_name = "FILE", default_value = "company_summary.docx")]
        out: PathBuf,

        /// Custom JSON summary profile
        #[arg(short, long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// Declared MIME type (default: guessed from the file extension)
        #[arg(long)]
        mime: Option<String>,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
    /// Print the text extracted from a PDF or DOCX (without summarizing)
    Extract {
        /// Path to PDF or DOCX file
        input_file: PathBuf,

        /// Declared MIME type (default: guessed from the file extension)
        #[arg(long)]
        mime: Option<String>,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
    /// Inspect summary profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// List predefined profiles
    List,
    /// Print a predefined profile as JSON
    Show {
        /// Preset name (default: "company")
        #[arg(default_value = "company")]
        preset: String,
    },
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { bind, profile } => commands::serve::run(bind, profile),
        Commands::Summarize {
            input_file,
            out,
            profile,
            mime,
            output,
        } => commands::summarize::run(input_file, &out, profile, mime, &output),
        Commands::Extract {
            input_file,
            mime,
            output,
        } => commands::extract::run(input_file, mime, &output),
        Commands::Profile { action } => match action {
            ProfileAction::List => commands::profile::list(),
            ProfileAction::Show { preset } => commands::profile::show(&preset),
            ProfileAction::Validate { file } => commands::profile::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
