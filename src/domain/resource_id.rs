use std::fmt::{self, Display, Formatter};

/// Logical name of a table as the host application knows it, e.g. `core/cache`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// Returns a `ResourceId` if `s` has the `module/entity` shape.
    pub fn parse(s: impl Into<String>) -> Result<Self, String> {
        let s = s.into();
        let trimmed = s.trim();

        let Some((module, entity)) = trimmed.split_once('/') else {
            return Err(format!(
                "Invalid resource id: '{trimmed}' is missing the '/' separator."
            ));
        };

        if module.is_empty() || entity.is_empty() {
            return Err(format!(
                "Invalid resource id: '{trimmed}' needs both a module and an entity."
            ));
        }

        let valid = |part: &str| {
            part.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        };
        if !valid(module) || !valid(entity) {
            return Err(format!(
                "Invalid resource id: '{trimmed}' allows only lowercase letters, digits and '_'."
            ));
        }

        Ok(ResourceId(trimmed.to_string()))
    }

    pub fn module(&self) -> &str {
        self.split().0
    }

    pub fn entity(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        // parse guarantees exactly one separator
        self.0.split_once('/').unwrap_or((&self.0, ""))
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
