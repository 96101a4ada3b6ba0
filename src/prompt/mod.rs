//! Interactive prompts
//!
//! The `Prompter` trait abstracts the terminal so the run can be driven by
//! scripted answers in tests. `DialoguerPrompter` is the terminal-backed
//! implementation.

pub mod dialoguer;

pub use self::dialoguer::DialoguerPrompter;

use crate::core::config::RunConfig;
use crate::core::selection::UserSelection;
use thiserror::Error;
use tracing::debug;

/// Errors raised by the underlying terminal
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of operator answers
pub trait Prompter {
    /// Pick zero or more options; the result keeps presentation order.
    fn multi_select(
        &mut self,
        message: &str,
        options: &[String],
    ) -> Result<Vec<String>, PromptError>;

    /// Pick exactly one option.
    fn single_select(&mut self, message: &str, options: &[String]) -> Result<String, PromptError>;

    /// Read a free-text line, trimmed.
    fn read_line(&mut self, message: &str) -> Result<String, PromptError>;
}

/// Ordered prompt sequence for one run
pub struct PromptSession;

impl PromptSession {
    pub const REPOSITORIES: &'static str = "Choose repositories:";
    pub const BASE_BRANCH: &'static str = "Choose a base branch:";
    pub const COMPARE_BRANCH: &'static str = "Choose a compare branch:";
    pub const TITLE: &'static str = "Enter the PR title:";

    /// Ask for repositories, base branch, compare branch and title, in that order.
    pub fn collect(
        prompter: &mut dyn Prompter,
        config: &RunConfig,
    ) -> Result<UserSelection, PromptError> {
        let repositories =
            prompter.multi_select(Self::REPOSITORIES, &config.selectable_repositories)?;
        let base_branch =
            prompter.single_select(Self::BASE_BRANCH, &config.selectable_branches)?;
        let compare_branch =
            prompter.single_select(Self::COMPARE_BRANCH, &config.selectable_branches)?;
        let title = prompter.read_line(Self::TITLE)?;

        let selection = UserSelection {
            repositories,
            base_branch,
            compare_branch,
            title,
        };
        debug!(?selection, "collected selection");
        Ok(selection)
    }
}
