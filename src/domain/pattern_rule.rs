use regex::Regex;

use super::{Action, TableName};

/// Selects tables from the snapshot by name and applies one action to all of them.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub regex: Regex,
    pub label: String,
    pub action: Action,
}

impl PatternRule {
    pub fn new(
        pattern: &str,
        label: impl Into<String>,
        action: Action,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            label: label.into(),
            action,
        })
    }

    /// Tables whose name matches, in snapshot order.
    pub fn matches(&self, tables: &[TableName]) -> Vec<TableName> {
        tables
            .iter()
            .filter(|t| self.regex.is_match(t.as_ref()))
            .cloned()
            .collect()
    }
}

/// Changelog, category flat and product flat rules, in that order.
pub fn default_rules() -> Vec<PatternRule> {
    [
        ("_cl$", "Changelog", Action::Truncate),
        ("_category_flat_", "Category Flat", Action::Drop),
        ("_product_flat_", "Product Flat", Action::Drop),
    ]
    .into_iter()
    // Safe to panic here as patterns are hardcoded constants, caught at dev/test time
    .map(|(p, l, a)| {
        PatternRule::new(p, l, a).expect("Hardcoded table patterns should always compile")
    })
    .collect()
}
