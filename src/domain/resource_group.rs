use super::ResourceId;

/// Named set of logical resources that are truncated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    pub name: String,
    pub members: Vec<ResourceId>,
}

impl ResourceGroup {
    pub fn new(name: impl Into<String>, members: Vec<ResourceId>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    fn from_static(name: &str, members: &[&str]) -> Self {
        let members = members
            .iter()
            // Safe to panic here as ids are hardcoded constants, caught at dev/test time
            .map(|m| {
                ResourceId::parse(*m).expect("Hardcoded resource ids should always be valid")
            })
            .collect();
        Self::new(name, members)
    }
}

/// Built-in groups in the order they are processed.
pub fn default_groups() -> Vec<ResourceGroup> {
    vec![
        ResourceGroup::from_static("Cache", &["core/cache", "core/cache_tag"]),
        ResourceGroup::from_static("Session", &["core/session"]),
        ResourceGroup::from_static(
            "Dataflow",
            &["dataflow/batch_export", "dataflow/batch_import"],
        ),
        ResourceGroup::from_static(
            "Enterprise Admin Logs",
            &["enterprise_logging/event", "enterprise_logging/event_changes"],
        ),
        ResourceGroup::from_static("Index", &["index/event", "index/process_event"]),
        ResourceGroup::from_static(
            "Logs",
            &[
                "log/customer",
                "log/quote_table",
                "log/summary_table",
                "log/summary_type_table",
                "log/url_table",
                "log/url_info_table",
                "log/visitor",
                "log/visitor_info",
                "log/visitor_online",
            ],
        ),
        ResourceGroup::from_static(
            "Reports",
            &[
                "reports/event",
                "reports/viewed_product_index",
                "reports/viewed_aggregated_daily",
                "reports/viewed_aggregated_monthly",
                "reports/viewed_aggregated_yearly",
            ],
        ),
        ResourceGroup::from_static(
            "Quotes",
            &[
                "sales/quote",
                "sales/quote_address",
                "sales/quote_address_item",
                "sales/quote_item",
                "sales/quote_item_option",
                "sales/quote_payment",
                "sales/quote_shipping_rate",
            ],
        ),
    ]
}
