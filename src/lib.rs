//! multipr - open the same pull request across many repositories
//!
//! Repository set, branch pair and title are collected interactively, shown
//! for confirmation, then one PR is opened per repository through the GitHub API.

pub mod cli;
pub mod core;
pub mod platform;
pub mod prompt;
