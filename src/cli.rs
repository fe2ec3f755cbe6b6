use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Aggressively cleans out old database records
    #[command(name = "db:maintain:clean-tables")]
    CleanTables {
        /// Do not prompt for confirmation before truncating tables
        #[arg(short, long)]
        force: bool,
    },
}
