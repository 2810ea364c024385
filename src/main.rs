use brai_phenotype_api::cli::{self, Cli, Command};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Models(args) => cli::client::run_models(args).await,
        Command::Phenotypes(args) => cli::client::run_phenotypes(args).await,
        Command::Register(args) => cli::client::run_register(args).await,
        Command::Unregister(args) => cli::client::run_unregister(args).await,
        Command::Predict(args) => cli::client::run_predict(args).await,
    }
}
