//! Operator selection and its validation

use thiserror::Error;

/// Errors that stop a run after the prompts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no repositories selected")]
    NoRepositories,

    #[error("base branch not selected")]
    NoBaseBranch,

    #[error("compare branch not selected")]
    NoCompareBranch,
}

/// Raw answers collected from the prompts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSelection {
    /// Chosen repositories, in presentation order
    pub repositories: Vec<String>,
    pub base_branch: String,
    pub compare_branch: String,
    pub title: String,
}

impl UserSelection {
    /// Check required fields in order; the first failure wins.
    ///
    /// An empty title is accepted.
    pub fn validate(self) -> Result<ValidatedSelection, ValidationError> {
        if self.repositories.is_empty() {
            return Err(ValidationError::NoRepositories);
        }
        if self.base_branch.is_empty() {
            return Err(ValidationError::NoBaseBranch);
        }
        if self.compare_branch.is_empty() {
            return Err(ValidationError::NoCompareBranch);
        }
        Ok(ValidatedSelection { inner: self })
    }
}

/// A selection that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSelection {
    inner: UserSelection,
}

impl ValidatedSelection {
    pub fn repositories(&self) -> &[String] {
        &self.inner.repositories
    }

    pub fn base_branch(&self) -> &str {
        &self.inner.base_branch
    }

    pub fn compare_branch(&self) -> &str {
        &self.inner.compare_branch
    }

    pub fn title(&self) -> &str {
        &self.inner.title
    }

    pub fn title_is_empty(&self) -> bool {
        self.inner.title.is_empty()
    }
}
