use async_trait::async_trait;

use crate::domain::TableName;

/// The statements the cleaner issues against one database handle.
///
/// Errors are the driver's own and are never retried.
#[async_trait]
pub trait Database: Send {
    /// Every table currently in the schema, in the order the server lists them.
    async fn show_tables(&mut self) -> Result<Vec<TableName>, sqlx::Error>;

    /// Base tables of the schema, used to tell which logical resources exist.
    async fn installed_tables(&mut self) -> Result<Vec<TableName>, sqlx::Error>;

    async fn set_foreign_key_checks(&mut self, enabled: bool) -> Result<(), sqlx::Error>;

    async fn truncate_table(&mut self, table: &TableName) -> Result<(), sqlx::Error>;

    async fn drop_table(&mut self, table: &TableName) -> Result<(), sqlx::Error>;
}
