use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "honyaku", about = "On-device translation demo", version)]
pub struct Cli {
    /// Run a single operation instead of the interactive loop
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Translate text between two languages
    Translate {
        text: String,
        /// Source language code, defaults to the configured one
        #[arg(long)]
        from: Option<String>,
        /// Target language code, defaults to the configured one
        #[arg(long)]
        to: Option<String>,
    },
    /// List downloaded language models
    Models,
    /// Show the download state of one language model
    Status { language: String },
    /// Download a language model
    Download {
        language: String,
        /// Allow downloading over a cellular connection
        #[arg(long)]
        cellular: bool,
        /// Disallow downloading in the background
        #[arg(long)]
        no_background: bool,
    },
    /// Delete a downloaded language model
    Delete { language: String },
    /// List every supported language
    Languages,
}
