//! Literal find-and-replace over single files and whole trees.
//!
//! ## Behavior
//!
//! - Matching is plain substring matching, no regex and no word boundaries.
//! - Files whose bytes are not valid UTF-8 are treated as binary and skipped
//!   untouched.
//! - A decodable file is always written back, even when nothing matched, so
//!   its modification time changes on every pass. Line endings and BOMs are
//!   preserved byte-for-byte.
//! - Per-file I/O failures are collected in the [`PassReport`]; the walk
//!   carries on with the next file.

use crate::error::{RenameError, Result};

use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// One `old → new` literal substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub old: String,
    pub new: String,
}

impl Replacement {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// Replaces every occurrence of `old` in `content`.
    ///
    /// Returns the rewritten text and the number of occurrences replaced.
    pub fn apply(&self, content: &str) -> (String, usize) {
        if self.old.is_empty() {
            return (content.to_string(), 0);
        }

        let occurrences = content.matches(self.old.as_str()).count();
        if occurrences == 0 {
            return (content.to_string(), 0);
        }

        (content.replace(self.old.as_str(), &self.new), occurrences)
    }
}

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Decoded and written back (or would be, in dry-run mode).
    Rewritten { occurrences: usize },
    /// Not valid UTF-8; left untouched.
    Binary,
}

/// A file the pass could not process.
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of one full-tree substitution pass.
#[derive(Debug, Default, Clone)]
pub struct PassReport {
    /// Files written back, whether or not they contained a match.
    pub rewritten: usize,
    /// Files that actually contained at least one occurrence.
    pub matched: usize,
    /// Total occurrences replaced across all files.
    pub occurrences: usize,
    /// Binary files skipped.
    pub binary: usize,
    pub failures: Vec<FileFailure>,
}

impl PassReport {
    /// Tallies the outcome of one file. A failure is kept and the pass goes on.
    pub fn record(&mut self, path: &Path, outcome: Result<FileOutcome>) {
        match outcome {
            Ok(FileOutcome::Rewritten { occurrences }) => {
                self.rewritten += 1;
                self.occurrences += occurrences;
                if occurrences > 0 {
                    self.matched += 1;
                }
            }
            Ok(FileOutcome::Binary) => self.binary += 1,
            Err(e) => {
                log::debug!("Replacement failed for {}: {}", path.display(), e);
                self.failures.push(FileFailure {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        }
    }
}

/// Applies `replacement` to a single file.
///
/// In dry-run mode the file is read and decoded but not written.
pub fn replace_in_file(
    path: &Path,
    replacement: &Replacement,
    dry_run: bool,
) -> Result<FileOutcome> {
    let bytes = fs::read(path).map_err(|e| {
        RenameError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })?;

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => {
            log::debug!("Skipping binary file: {}", path.display());
            return Ok(FileOutcome::Binary);
        }
    };

    let (updated, occurrences) = replacement.apply(&content);

    if !dry_run {
        fs::write(path, updated).map_err(|e| {
            RenameError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write {}: {}", path.display(), e),
            ))
        })?;
    }

    if occurrences > 0 {
        log::debug!(
            "Replaced {} occurrence(s) in {}",
            occurrences,
            path.display()
        );
    }

    Ok(FileOutcome::Rewritten { occurrences })
}

/// Applies `replacement` to every regular file beneath `root`.
///
/// Hidden files and ignored files are included. Symlinked directories are
/// not entered, but a symlink to a file rewrites its target.
/// When `extensions` is given, only files whose name ends with one of the
/// suffixes are processed.
pub fn replace_in_tree(
    root: &Path,
    replacement: &Replacement,
    extensions: Option<&[&str]>,
    dry_run: bool,
) -> PassReport {
    let mut report = PassReport::default();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let path = entry.path();

        // A symlink to a regular file is rewritten through the link.
        let is_file = entry
            .file_type()
            .is_some_and(|ft| ft.is_file() || (ft.is_symlink() && path.is_file()));
        if !is_file {
            continue;
        }

        if let Some(exts) = extensions {
            if !has_extension(path, exts) {
                continue;
            }
        }

        report.record(path, replace_in_file(path, replacement, dry_run));
    }

    log::info!(
        "'{}' → '{}': {} file(s) rewritten, {} with matches, {} binary skipped",
        replacement.old,
        replacement.new,
        report.rewritten,
        report.matched,
        report.binary
    );

    report
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| extensions.iter().any(|ext| name.ends_with(ext)))
}
