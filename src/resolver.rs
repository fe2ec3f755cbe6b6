use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::configuration::ResourceSettings;
use crate::domain::{ResourceId, TableName};
use crate::repository::Database;

/// Maps a logical resource id to its physical table.
///
/// `None` means the host application has no such table, which callers treat as
/// an expected skip rather than an error.
#[async_trait]
pub trait Resolver: Send {
    /// Reads what resolution depends on from the schema. Called once per run,
    /// after the operator agreed to go ahead.
    async fn load<D: Database>(&mut self, _db: &mut D) -> Result<(), sqlx::Error> {
        Ok(())
    }

    fn resolve(&self, id: &ResourceId) -> Option<TableName>;
}

// Entity definitions of the modules whose tables the cleaner knows about.
const BUILTIN_ENTITIES: &[(&str, &str)] = &[
    ("core/cache", "core_cache"),
    ("core/cache_tag", "core_cache_tag"),
    ("core/session", "core_session"),
    ("dataflow/batch_export", "dataflow_batch_export"),
    ("dataflow/batch_import", "dataflow_batch_import"),
    ("enterprise_logging/event", "enterprise_logging_event"),
    ("enterprise_logging/event_changes", "enterprise_logging_event_changes"),
    ("index/event", "index_event"),
    ("index/process_event", "index_process_event"),
    ("log/customer", "log_customer"),
    ("log/quote_table", "log_quote"),
    ("log/summary_table", "log_summary"),
    ("log/summary_type_table", "log_summary_type"),
    ("log/url_table", "log_url"),
    ("log/url_info_table", "log_url_info"),
    ("log/visitor", "log_visitor"),
    ("log/visitor_info", "log_visitor_info"),
    ("log/visitor_online", "log_visitor_online"),
    ("reports/event", "report_event"),
    ("reports/viewed_product_index", "report_viewed_product_index"),
    ("reports/viewed_aggregated_daily", "report_viewed_product_aggregated_daily"),
    ("reports/viewed_aggregated_monthly", "report_viewed_product_aggregated_monthly"),
    ("reports/viewed_aggregated_yearly", "report_viewed_product_aggregated_yearly"),
    ("sales/quote", "sales_flat_quote"),
    ("sales/quote_address", "sales_flat_quote_address"),
    ("sales/quote_address_item", "sales_flat_quote_address_item"),
    ("sales/quote_item", "sales_flat_quote_item"),
    ("sales/quote_item_option", "sales_flat_quote_item_option"),
    ("sales/quote_payment", "sales_flat_quote_payment"),
    ("sales/quote_shipping_rate", "sales_flat_quote_shipping_rate"),
];

/// Resolver backed by the host application's entity definitions.
///
/// Once loaded, an entity whose table is missing from the schema resolves to
/// `None`, the same as an entity of an excluded module.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    table_prefix: String,
    excluded_modules: HashSet<String>,
    entities: HashMap<String, String>,
    installed: Option<HashSet<TableName>>,
}

impl ResourceRegistry {
    pub fn new(settings: &ResourceSettings) -> Self {
        let mut entities: HashMap<String, String> = BUILTIN_ENTITIES
            .iter()
            .map(|(id, table)| (id.to_string(), table.to_string()))
            .collect();
        entities.extend(settings.entities.clone());

        Self {
            table_prefix: settings.table_prefix.clone(),
            excluded_modules: settings.excluded_modules.iter().cloned().collect(),
            entities,
            installed: None,
        }
    }

    /// Restricts resolution to `tables`, as `load` does from the schema.
    pub fn with_installed_tables(mut self, tables: impl IntoIterator<Item = TableName>) -> Self {
        self.installed = Some(tables.into_iter().collect());
        self
    }
}

#[async_trait]
impl Resolver for ResourceRegistry {
    #[tracing::instrument(skip_all)]
    async fn load<D: Database>(&mut self, db: &mut D) -> Result<(), sqlx::Error> {
        let tables = db.installed_tables().await?;
        tracing::debug!(tables = tables.len(), "Loaded installed tables");
        self.installed = Some(tables.into_iter().collect());
        Ok(())
    }

    fn resolve(&self, id: &ResourceId) -> Option<TableName> {
        if self.excluded_modules.contains(id.module()) {
            return None;
        }
        let table = self
            .entities
            .get(id.as_ref())
            .map(|table| TableName::new(format!("{}{}", self.table_prefix, table)))?;
        match &self.installed {
            Some(installed) if !installed.contains(&table) => None,
            _ => Some(table),
        }
    }
}
