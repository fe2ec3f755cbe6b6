use uuid::Uuid;

use crate::console::{Prompt, PromptError, Reporter};
use crate::domain::{
    Action, PatternRule, ResourceGroup, TableName, default_groups, default_rules,
};
use crate::repository::Database;
use crate::resolver::Resolver;
use crate::utils::error_chain_fmt;

const PRE_EXECUTE_WARNING: &str =
    "You're about to modify your database. Are you sure you want to continue?";

#[derive(thiserror::Error)]
pub enum CleanError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl std::fmt::Debug for CleanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// What a finished run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanReport {
    /// The operator declined the initial warning, nothing was touched.
    pub aborted: bool,
    pub truncated: Vec<TableName>,
    pub dropped: Vec<TableName>,
    /// Groups and rules the operator declined.
    pub skipped: Vec<String>,
}

impl CleanReport {
    pub fn aborted() -> Self {
        Self {
            aborted: true,
            ..Default::default()
        }
    }

    fn record(&mut self, action: Action, table: TableName) {
        match action {
            Action::Truncate => self.truncated.push(table),
            Action::Drop => self.dropped.push(table),
        }
    }
}

/// Truncates the configured resource groups, then truncates or drops the
/// tables picked by the pattern rules, with foreign key checks disabled on the
/// write handle for the duration.
pub struct TableCleaner<D, R, P, O> {
    read: D,
    write: D,
    resolver: R,
    prompt: P,
    reporter: O,
    groups: Vec<ResourceGroup>,
    rules: Vec<PatternRule>,
}

impl<D, R, P, O> TableCleaner<D, R, P, O>
where
    D: Database,
    R: Resolver,
    P: Prompt,
    O: Reporter,
{
    /// Cleaner over the built-in groups and rules.
    pub fn new(read: D, write: D, resolver: R, prompt: P, reporter: O) -> Self {
        Self {
            read,
            write,
            resolver,
            prompt,
            reporter,
            groups: default_groups(),
            rules: default_rules(),
        }
    }

    pub fn with_groups(mut self, groups: Vec<ResourceGroup>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_rules(mut self, rules: Vec<PatternRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Hands the collaborators back, mostly so callers can close connections.
    pub fn into_parts(self) -> (D, D, R, P, O) {
        (self.read, self.write, self.resolver, self.prompt, self.reporter)
    }

    /// Runs the whole clean once.
    ///
    /// Any database error stops the run where it happened. Statements already
    /// issued stay applied, and foreign key checks are not switched back on for
    /// the write session in that case.
    #[tracing::instrument(name = "Cleaning tables", skip(self), fields(run_id = %Uuid::new_v4()))]
    pub async fn run(&mut self, force: bool) -> Result<CleanReport, CleanError> {
        if !force && !self.prompt.confirm(PRE_EXECUTE_WARNING, false)? {
            tracing::info!("Operator declined the warning, database left untouched");
            return Ok(CleanReport::aborted());
        }

        // snapshot used for pattern matching only, never refreshed
        let tables = self.read.show_tables().await?;
        tracing::debug!(tables = tables.len(), "Fetched table list");

        // groups resolve against the resolver's own view of the schema
        self.resolver.load(&mut self.read).await?;

        self.write.set_foreign_key_checks(false).await?;

        let mut report = CleanReport::default();
        if let Err(e) = self.clean(&tables, force, &mut report).await {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Clean aborted, foreign key checks are still disabled on the write session",
            );
            return Err(e);
        }

        self.write.set_foreign_key_checks(true).await?;

        tracing::info!(
            truncated = report.truncated.len(),
            dropped = report.dropped.len(),
            skipped = report.skipped.len(),
            "Clean completed"
        );
        Ok(report)
    }

    async fn clean(
        &mut self,
        tables: &[TableName],
        force: bool,
        report: &mut CleanReport,
    ) -> Result<(), CleanError> {
        for group in self.groups.clone() {
            self.truncate_group(&group, force, report).await?;
        }
        for rule in self.rules.clone() {
            self.clean_matches(&rule, tables, force, report).await?;
        }
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(group = %group.name))]
    async fn truncate_group(
        &mut self,
        group: &ResourceGroup,
        force: bool,
        report: &mut CleanReport,
    ) -> Result<(), CleanError> {
        let tables: Vec<TableName> = group
            .members
            .iter()
            .filter_map(|id| {
                let table = self.resolver.resolve(id);
                if table.is_none() {
                    tracing::debug!(resource = %id, "Resource has no table");
                }
                table
            })
            .collect();

        if tables.is_empty() {
            return Ok(());
        }

        self.confirm_and_apply(&group.name, Action::Truncate, &tables, force, report)
            .await
    }

    #[tracing::instrument(skip_all, fields(rule = %rule.label))]
    async fn clean_matches(
        &mut self,
        rule: &PatternRule,
        tables: &[TableName],
        force: bool,
        report: &mut CleanReport,
    ) -> Result<(), CleanError> {
        let matched = rule.matches(tables);
        if matched.is_empty() {
            return Ok(());
        }

        self.confirm_and_apply(&rule.label, rule.action, &matched, force, report)
            .await
    }

    async fn confirm_and_apply(
        &mut self,
        label: &str,
        action: Action,
        tables: &[TableName],
        force: bool,
        report: &mut CleanReport,
    ) -> Result<(), CleanError> {
        if !force {
            self.reporter.heading(label);
            let rows: Vec<Vec<String>> = tables.iter().map(|t| vec![t.to_string()]).collect();
            self.reporter.render(&rows);

            if !self.prompt.confirm(&action.confirmation_message(), false)? {
                tracing::info!(label, "Operator declined, skipping");
                self.reporter.skipped(label);
                report.skipped.push(label.to_string());
                return Ok(());
            }
        }

        for table in tables {
            match action {
                Action::Truncate => self.write.truncate_table(table).await?,
                Action::Drop => self.write.drop_table(table).await?,
            }
            tracing::info!(%table, action = action.label(), "Table cleaned");
            self.reporter.applied(action, table);
            report.record(action, table.clone());
        }
        Ok(())
    }
}
