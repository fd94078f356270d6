use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CVWallet — terminal demo of an evidence-based skills attestation wizard.
#[derive(Parser, Debug)]
#[command(name = "cvwallet")]
#[command(version = "0.1.0")]
#[command(about = "Prove your skills with evidence-backed AI attestations.", long_about = None)]
pub struct Cli {
    /// Gemini model to use (overrides config)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Config file path (default: ~/.cvwallet/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive demo: job posting plus wizard (default)
    Run,

    /// Generate an attestation without the UI and print it as JSON
    Attest {
        /// GitHub repository URL to offer as evidence
        #[arg(long)]
        repo: Option<String>,

        /// Document name to offer as evidence (repeatable)
        #[arg(long = "file")]
        files: Vec<String>,
    },
}
