use async_trait::async_trait;
use sqlx::{Executor, MySqlConnection};

use super::Database;
use crate::domain::TableName;

/// A single dedicated MySQL connection.
///
/// `foreign_key_checks` is a session variable, so the write handle must stay
/// on one connection for the whole run rather than come from a pool.
pub struct MySqlDatabase {
    connection: MySqlConnection,
}

impl MySqlDatabase {
    pub fn new(connection: MySqlConnection) -> Self {
        Self { connection }
    }
}

// Names are fetched as bytes, some server versions report these columns with a
// binary collation. A name that is not UTF-8 could not be addressed again.
fn decode_table_names(names: Vec<Vec<u8>>) -> Result<Vec<TableName>, sqlx::Error> {
    names
        .into_iter()
        .map(|n| {
            String::from_utf8(n)
                .map(TableName::from)
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))
        })
        .collect()
}

#[async_trait]
impl Database for MySqlDatabase {
    #[tracing::instrument(skip(self))]
    async fn show_tables(&mut self) -> Result<Vec<TableName>, sqlx::Error> {
        let names: Vec<Vec<u8>> = sqlx::query_scalar("SHOW TABLES")
            .fetch_all(&mut self.connection)
            .await?;
        decode_table_names(names)
    }

    #[tracing::instrument(skip(self))]
    async fn installed_tables(&mut self) -> Result<Vec<TableName>, sqlx::Error> {
        let names: Vec<Vec<u8>> = sqlx::query_scalar(
            r#"
            SELECT TABLE_NAME
            FROM information_schema.TABLES
            WHERE TABLE_SCHEMA = DATABASE() AND TABLE_TYPE = 'BASE TABLE'
            "#,
        )
        .fetch_all(&mut self.connection)
        .await?;
        decode_table_names(names)
    }

    #[tracing::instrument(skip(self))]
    async fn set_foreign_key_checks(&mut self, enabled: bool) -> Result<(), sqlx::Error> {
        let sql = if enabled {
            "SET foreign_key_checks = 1"
        } else {
            "SET foreign_key_checks = 0"
        };
        self.connection.execute(sql).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(table = %table))]
    async fn truncate_table(&mut self, table: &TableName) -> Result<(), sqlx::Error> {
        let sql = format!("TRUNCATE TABLE {}", table.quoted());
        self.connection.execute(sql.as_str()).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(table = %table))]
    async fn drop_table(&mut self, table: &TableName) -> Result<(), sqlx::Error> {
        let sql = format!("DROP TABLE IF EXISTS {}", table.quoted());
        self.connection.execute(sql.as_str()).await?;
        Ok(())
    }
}
