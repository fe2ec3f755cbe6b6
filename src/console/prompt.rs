use inquire::{Confirm, InquireError};

use crate::utils::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum PromptError {
    #[error("Failed to read confirmation from the terminal")]
    Terminal(#[source] InquireError),
}

impl std::fmt::Debug for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Yes/no question to the operator.
pub trait Prompt {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;
}

/// Asks on the controlling terminal.
#[derive(Debug, Default)]
pub struct InquirePrompt;

impl Prompt for InquirePrompt {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        match Confirm::new(message).with_default(default).prompt() {
            Ok(answer) => Ok(answer),
            // Esc reads as "no", Ctrl-C and a missing tty abort the run
            Err(InquireError::OperationCanceled) => Ok(false),
            Err(e) => Err(PromptError::Terminal(e)),
        }
    }
}
