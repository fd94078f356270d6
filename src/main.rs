use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cvwallet::cli::{Cli, Commands};
use cvwallet::evidence::collect_evidence;
use cvwallet::{AttestationOracle, WalletConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the alternate-screen UI stays clean.
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut config = match cli.config.as_deref() {
        Some(path) => WalletConfig::load_from(path)?,
        None => WalletConfig::load()?,
    };
    if let Some(model) = cli.model {
        config.model = model;
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cvwallet::ui::run(&config),
        Commands::Attest { repo, files } => {
            let evidence = collect_evidence(repo.as_deref().unwrap_or(""), &files);
            let oracle = AttestationOracle::from_config(&config);
            let attestation = oracle.attest(&evidence).await?;
            println!("{}", serde_json::to_string_pretty(&attestation)?);
            Ok(())
        }
    }
}
