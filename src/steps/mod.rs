//! The rename steps, in the order the orchestrator runs them.
//!
//! Each step takes the shared [`Context`] and reports through the
//! [`Transcript`](crate::report::Transcript). Steps never return errors: a
//! failing step reports and the run moves on to the next one.

pub mod app_name;
pub mod kotlin;
pub mod podspec;
pub mod rename;
pub mod substitute;

use crate::names::Identifiers;
use std::path::PathBuf;

/// Everything a step needs to know about the current run.
#[derive(Debug, Clone)]
pub struct Context {
    /// Project root; all template paths are resolved against it.
    pub root: PathBuf,
    pub ids: Identifiers,
    /// Executable invoked to set the platform app names.
    pub rename_tool: String,
    pub dry_run: bool,
}
