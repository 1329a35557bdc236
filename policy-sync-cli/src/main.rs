mod cli;
mod convert;
mod manifest;
mod merge;

use crate::cli::Cli;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    setup_subscriber();

    let cli = Cli::parse();
    match cli.command {
        crate::cli::Commands::Convert { file, output } => convert::run(&file, output)?,
        crate::cli::Commands::Key { file } => convert::run_keys(&file)?,
        crate::cli::Commands::Merge { endpoint, pod } => merge::run(&endpoint, &pod)?,
        crate::cli::Commands::Crd => policy_sync_crds::crd_gen_workloadendpoint()?,
    };
    Ok(())
}

fn setup_subscriber() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "policy_sync_cli=info,policy_sync_converter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
