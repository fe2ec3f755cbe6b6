use claims::assert_ok;
use dbclean::configuration::ResourceSettings;
use dbclean::domain::TableName;
use dbclean::resolver::ResourceRegistry;

use crate::helpers::{Call, Handle, TestCleaner, WARNING, run_with, truncated};

// A community install: every built-in table except the enterprise logging ones.
const COMMUNITY_TABLES: &[&str] = &[
    "core_cache",
    "core_cache_tag",
    "core_session",
    "dataflow_batch_export",
    "dataflow_batch_import",
    "index_event",
    "index_process_event",
    "log_customer",
    "log_quote",
    "log_summary",
    "log_summary_type",
    "log_url",
    "log_url_info",
    "log_visitor",
    "log_visitor_info",
    "log_visitor_online",
    "report_event",
    "report_viewed_product_index",
    "report_viewed_product_aggregated_daily",
    "report_viewed_product_aggregated_monthly",
    "report_viewed_product_aggregated_yearly",
    "sales_flat_quote",
    "sales_flat_quote_address",
    "sales_flat_quote_address_item",
    "sales_flat_quote_item",
    "sales_flat_quote_item_option",
    "sales_flat_quote_payment",
    "sales_flat_quote_shipping_rate",
    "catalog_product_entity",
];

fn registry() -> ResourceRegistry {
    ResourceRegistry::new(&ResourceSettings::default())
}

#[tokio::test]
async fn tables_missing_from_the_schema_are_skipped() {
    let builder = TestCleaner::new()
        .snapshot(COMMUNITY_TABLES)
        .strict_schema();

    let outcome = run_with(builder, registry(), true).await;

    let report = assert_ok!(outcome.result);
    let expected: Vec<TableName> = COMMUNITY_TABLES
        .iter()
        .filter(|t| **t != "catalog_product_entity")
        .map(|t| TableName::from(*t))
        .collect();
    assert_eq!(report.truncated, expected);
    assert!(
        !outcome
            .log
            .destructive()
            .iter()
            .any(|c| matches!(c, Call::Truncate(t) if t.starts_with("enterprise_logging")))
    );
    assert_eq!(
        outcome.log.all().last(),
        Some(&(Handle::Write, Call::ForeignKeyChecks(true)))
    );
}

#[tokio::test]
async fn group_left_empty_by_the_schema_is_not_offered() {
    let builder = TestCleaner::new()
        .group(
            "Enterprise Admin Logs",
            &["enterprise_logging/event", "enterprise_logging/event_changes"],
        )
        .group("Cache", &["core/cache", "core/cache_tag"])
        .snapshot(&["core_cache"])
        .strict_schema()
        .answers(&[true, true]);

    let outcome = run_with(builder, registry(), false).await;

    assert_ok!(outcome.result);
    assert_eq!(outcome.asked, vec![WARNING, "Truncate table(s)?"]);
    assert_eq!(outcome.log.destructive(), vec![truncated("core_cache")]);
}

#[tokio::test]
async fn schema_is_read_once_before_checks_are_disabled() {
    let builder = TestCleaner::new()
        .group("Cache", &["core/cache"])
        .snapshot(&["core_cache"]);

    let outcome = run_with(builder, registry(), true).await;

    assert_ok!(outcome.result);
    assert_eq!(
        outcome.log.all(),
        vec![
            (Handle::Read, Call::ShowTables),
            (Handle::Read, Call::InstalledTables),
            (Handle::Write, Call::ForeignKeyChecks(false)),
            (Handle::Write, truncated("core_cache")),
            (Handle::Write, Call::ForeignKeyChecks(true)),
        ]
    );
}

#[tokio::test]
async fn declining_the_warning_skips_the_schema_lookup() {
    let builder = TestCleaner::new()
        .snapshot(COMMUNITY_TABLES)
        .answers(&[false]);

    let outcome = run_with(builder, registry(), false).await;

    let report = assert_ok!(outcome.result);
    assert!(report.aborted);
    assert!(outcome.log.calls().is_empty());
}

#[tokio::test]
async fn failed_schema_lookup_stops_before_checks_are_touched() {
    let builder = TestCleaner::new()
        .snapshot(&["core_cache"])
        .fail_on(Handle::Read, Call::InstalledTables);

    let outcome = run_with(builder, registry(), true).await;

    assert!(outcome.result.is_err());
    assert_eq!(outcome.log.calls(), vec![Call::ShowTables]);
}
