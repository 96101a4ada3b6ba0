//! Summary rendering and the yes/no gate before any PR is opened

use std::fmt::Write as _;

use crate::core::selection::ValidatedSelection;
use crate::prompt::{PromptError, Prompter};

const SEPARATOR: &str = "---------------------------------";

/// A selection the operator explicitly approved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedSelection {
    inner: ValidatedSelection,
}

impl ConfirmedSelection {
    pub fn repositories(&self) -> &[String] {
        self.inner.repositories()
    }

    pub fn base_branch(&self) -> &str {
        self.inner.base_branch()
    }

    pub fn compare_branch(&self) -> &str {
        self.inner.compare_branch()
    }

    pub fn title(&self) -> &str {
        self.inner.title()
    }
}

/// Operator's answer at the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed(ConfirmedSelection),
    Declined,
}

pub struct ConfirmationView;

impl ConfirmationView {
    pub const QUESTION: &'static str = "Is this information correct? (yes/no)";

    /// Render the summary block shown before confirmation
    pub fn render(selection: &ValidatedSelection) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", SEPARATOR);
        let _ = writeln!(out, "You have entered the following information:");
        let _ = writeln!(out, "- Target Repositories:");
        for (i, repo) in selection.repositories().iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, repo);
        }
        let _ = writeln!(out, "- Base Branch:    {}", selection.base_branch());
        let _ = writeln!(out, "- Compare Branch: {}", selection.compare_branch());
        let _ = writeln!(out, "- PR Title:       {}", selection.title());
        let _ = writeln!(out, "{}", SEPARATOR);
        out
    }

    /// Only a literal "yes" (any case, surrounding whitespace ignored) counts
    pub fn is_affirmative(answer: &str) -> bool {
        answer.trim().to_lowercase() == "yes"
    }

    /// Ask the question and gate on the answer.
    ///
    /// The caller shows `render(&selection)` first.
    pub fn confirm(
        prompter: &mut dyn Prompter,
        selection: ValidatedSelection,
    ) -> Result<Confirmation, PromptError> {
        let answer = prompter.read_line(Self::QUESTION)?;
        if Self::is_affirmative(&answer) {
            Ok(Confirmation::Confirmed(ConfirmedSelection { inner: selection }))
        } else {
            Ok(Confirmation::Declined)
        }
    }
}
