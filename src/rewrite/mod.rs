//! Text rewriting across the project tree.

pub mod text;

pub use text::{FileFailure, FileOutcome, PassReport, Replacement, replace_in_file, replace_in_tree};
