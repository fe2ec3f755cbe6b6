use claims::assert_err;
use dbclean::CleanError;

use crate::helpers::{Call, Handle, TestCleaner, run, truncated};

#[tokio::test]
async fn failed_statement_stops_the_run_and_leaves_checks_disabled() {
    let builder = TestCleaner::new()
        .snapshot(&["index_cl", "catalog_product_flat_1"])
        .group("Cache", &["core/cache", "core/cache_tag"])
        .resolves("core/cache", "core_cache")
        .resolves("core/cache_tag", "core_cache_tag")
        .fail_on(Handle::Write, truncated("core_cache"));

    let outcome = run(builder, true).await;

    let err = assert_err!(outcome.result);
    assert!(matches!(err, CleanError::Database(sqlx::Error::Protocol(_))));
    // nothing after the failure, and no re-enable
    assert_eq!(
        outcome.log.calls(),
        vec![Call::ShowTables, Call::ForeignKeyChecks(false)]
    );
}

#[tokio::test]
async fn earlier_statements_stay_applied_after_a_failure() {
    let builder = TestCleaner::new()
        .snapshot(&["index_cl", "catalog_product_flat_1"])
        .fail_on(Handle::Write, Call::Drop("catalog_product_flat_1".into()));

    let outcome = run(builder, true).await;

    assert_err!(outcome.result);
    assert_eq!(outcome.log.destructive(), vec![truncated("index_cl")]);
    assert!(!outcome.log.calls().contains(&Call::ForeignKeyChecks(true)));
}

#[tokio::test]
async fn failed_table_listing_happens_before_checks_are_touched() {
    let builder = TestCleaner::new()
        .snapshot(&["index_cl"])
        .fail_on(Handle::Read, Call::ShowTables);

    let outcome = run(builder, true).await;

    assert_err!(outcome.result);
    assert!(outcome.log.calls().is_empty());
}

#[tokio::test]
async fn prompt_failure_aborts_without_statements() {
    let builder = TestCleaner::new().snapshot(&["index_cl"]).prompt_fails();

    let outcome = run(builder, false).await;

    let err = assert_err!(outcome.result);
    assert!(matches!(err, CleanError::Prompt(_)));
    assert!(outcome.log.calls().is_empty());
}

#[tokio::test]
async fn prompt_failure_mid_run_leaves_earlier_work_applied() {
    let builder = TestCleaner::new()
        .snapshot(&["index_cl"])
        .group("Cache", &["core/cache"])
        .resolves("core/cache", "core_cache")
        .answers(&[true, true])
        .prompt_fails();

    let outcome = run(builder, false).await;

    assert_err!(outcome.result);
    assert_eq!(outcome.log.destructive(), vec![truncated("core_cache")]);
    assert!(!outcome.log.calls().contains(&Call::ForeignKeyChecks(true)));
}
