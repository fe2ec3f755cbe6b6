use anyhow::Context;
use clap::Parser;
use dbclean::cli::{Cli, Commands};
use dbclean::configuration::get_config;
use dbclean::startup::build_cleaner;
use dbclean::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // logs go to stderr, stdout belongs to the prompts and table listings
    let subscriber = get_subscriber("dbclean".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber);

    if let Err(e) = try_main(cli).await {
        tracing::error!(error.cause_chain = ?e, error.message = %e, "Clean tables failed");
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

async fn try_main(cli: Cli) -> Result<(), anyhow::Error> {
    match cli.command {
        Commands::CleanTables { force } => {
            let config = get_config().context("Failed to read configuration")?;
            let mut cleaner = build_cleaner(&config).await?;
            cleaner.run(force).await?;
        }
    }
    Ok(())
}
