use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::{AppError, NamingEvent, NamingPrompt};
use crate::ports::NameInput;

/// Reads the pending name from the terminal, pre-filled with the default label.
///
/// Ctrl-C and an empty answer cancel the session.
#[derive(Debug, Default)]
pub struct TerminalNameInput;

impl NameInput for TerminalNameInput {
    fn request_name(&mut self, prompt: &NamingPrompt) -> Result<NamingEvent, AppError> {
        let result = Input::<String>::new()
            .with_prompt(format!("Name ({})", prompt.anchor.display()))
            .with_initial_text(prompt.default_label.clone())
            .allow_empty(true)
            .interact_text();

        match result {
            Ok(value) if value.trim().is_empty() => Ok(NamingEvent::Cancel),
            Ok(value) => Ok(NamingEvent::Commit(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Ok(NamingEvent::Cancel)
            }
            Err(err) => Err(AppError::config_error(format!("Failed to read name: {}", err))),
        }
    }
}

/// Commits a name supplied up front, e.g. from `--name`.
#[derive(Debug, Clone)]
pub struct PresetNameInput {
    name: Option<String>,
}

impl PresetNameInput {
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }
}

impl NameInput for PresetNameInput {
    fn request_name(&mut self, _prompt: &NamingPrompt) -> Result<NamingEvent, AppError> {
        Ok(match self.name.take() {
            Some(name) => NamingEvent::Commit(name),
            None => NamingEvent::Cancel,
        })
    }
}
