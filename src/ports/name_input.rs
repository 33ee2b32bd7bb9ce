use crate::domain::{AppError, NamingEvent, NamingPrompt};

/// Port for the host UI that collects a pending name from the operator.
pub trait NameInput {
    /// Show `prompt` and report how the operator finished it.
    fn request_name(&mut self, prompt: &NamingPrompt) -> Result<NamingEvent, AppError>;
}
