use anyhow::Context;
use sqlx::{ConnectOptions, MySqlConnection};

use crate::TableCleaner;
use crate::configuration::{Configuration, DatabaseSettings};
use crate::console::{InquirePrompt, TerminalReporter};
use crate::repository::MySqlDatabase;
use crate::resolver::ResourceRegistry;

/// Separate read and write handles, like the host application keeps.
pub struct Connections {
    pub read: MySqlDatabase,
    pub write: MySqlDatabase,
}

#[tracing::instrument(skip_all, fields(host = %config.host, database = %config.database_name))]
pub async fn connect(config: &DatabaseSettings) -> Result<Connections, anyhow::Error> {
    let read = open_connection(config)
        .await
        .context("Failed to open the read connection")?;
    let write = open_connection(config)
        .await
        .context("Failed to open the write connection")?;

    Ok(Connections {
        read: MySqlDatabase::new(read),
        write: MySqlDatabase::new(write),
    })
}

async fn open_connection(config: &DatabaseSettings) -> Result<MySqlConnection, sqlx::Error> {
    config.connect_options().connect().await
}

pub type TerminalCleaner =
    TableCleaner<MySqlDatabase, ResourceRegistry, InquirePrompt, TerminalReporter<std::io::Stdout>>;

/// Wires the cleaner to MySQL and the terminal.
pub async fn build_cleaner(config: &Configuration) -> Result<TerminalCleaner, anyhow::Error> {
    let Connections { read, write } = connect(&config.database).await?;
    let resolver = ResourceRegistry::new(&config.resources);

    Ok(TableCleaner::new(
        read,
        write,
        resolver,
        InquirePrompt,
        TerminalReporter::stdout(),
    ))
}
