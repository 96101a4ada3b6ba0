//! Terminal prompts backed by dialoguer

use ::dialoguer::theme::ColorfulTheme;
use ::dialoguer::{Input, MultiSelect, Select};

use super::{PromptError, Prompter};

impl From<::dialoguer::Error> for PromptError {
    fn from(e: ::dialoguer::Error) -> Self {
        match e {
            ::dialoguer::Error::IO(err) => PromptError::Io(err),
        }
    }
}

/// Prompter that talks to the controlling terminal
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn multi_select(
        &mut self,
        message: &str,
        options: &[String],
    ) -> Result<Vec<String>, PromptError> {
        if options.is_empty() {
            return Ok(Vec::new());
        }

        let mut picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .interact()?;
        picked.sort_unstable();

        Ok(picked.into_iter().map(|i| options[i].clone()).collect())
    }

    fn single_select(&mut self, message: &str, options: &[String]) -> Result<String, PromptError> {
        // dialoguer refuses an empty list; leave the gap for validation to report
        if options.is_empty() {
            return Ok(String::new());
        }

        let index = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .default(0)
            .interact()?;

        Ok(options[index].clone())
    }

    fn read_line(&mut self, message: &str) -> Result<String, PromptError> {
        let line: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;

        Ok(line.trim().to_string())
    }
}
