use std::fmt::{self, Display, Formatter};

/// What happens to a table once the operator agrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Remove all rows, keep the table.
    Truncate,
    /// Remove the table itself.
    Drop,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Truncate => "Truncate",
            Action::Drop => "Drop",
        }
    }

    pub fn confirmation_message(&self) -> String {
        format!("{} table(s)?", self.label())
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
