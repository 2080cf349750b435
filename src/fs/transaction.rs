//! Staged file and directory moves with rollback support.
//!
//! A relocation step stages every move it needs, then commits them together.
//! Nothing touches the disk until `commit()`.
//!
//! ## Execution Guarantees
//!
//! - **Validation**: Sources exist, targets are free (a file move may
//!   overwrite a regular file), no two moves share a target
//! - **Rollback**: A failed commit moves back what it already moved, in LIFO
//!   order, and restores any file a replacement overwrote
//! - **Dry run**: Staging is logged and checked, commit does nothing
//!
//! ## Example
//!
//! ```no_run
//! # use rename_project::fs::Transaction;
//! # use std::path::PathBuf;
//! # fn example() -> rename_project::Result<()> {
//! let mut txn = Transaction::new(false);
//! txn.move_directory(PathBuf::from("kotlin/base_app"), PathBuf::from("kotlin/shop"))?;
//! txn.commit()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{RenameError, Result};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
enum Operation {
    /// `displaced` holds the bytes of a target that the move overwrites.
    MoveFile {
        from: PathBuf,
        to: PathBuf,
        displaced: Option<Vec<u8>>,
    },
    MoveDirectory { from: PathBuf, to: PathBuf },
}

impl Operation {
    fn endpoints(&self) -> (&Path, &Path) {
        match self {
            Operation::MoveFile { from, to, .. } | Operation::MoveDirectory { from, to } => {
                (from, to)
            }
        }
    }

    fn is_dir(&self) -> bool {
        matches!(self, Operation::MoveDirectory { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransactionState {
    Building,
    Committed,
    Failed,
}

/// A batch of moves applied as a unit.
///
/// Dropping a non-empty transaction without committing logs a warning.
#[must_use = "Transaction must be committed"]
pub struct Transaction {
    operations: Vec<Operation>,
    dry_run: bool,
    state: TransactionState,
    executed: usize,
}

impl Transaction {
    pub fn new(dry_run: bool) -> Self {
        Self {
            operations: Vec::new(),
            dry_run,
            state: TransactionState::Building,
            executed: 0,
        }
    }

    /// Stages a single-file move.
    ///
    /// An existing regular file at `to` is overwritten. Its contents are kept
    /// so a failed commit can put them back.
    pub fn move_file(&mut self, from: PathBuf, to: PathBuf) -> Result<()> {
        self.ensure_building()?;

        if !from.is_file() {
            return Err(RenameError::SourceMissing(from));
        }

        let displaced = if to.is_file() {
            Some(fs::read(&to)?)
        } else if to.exists() {
            return Err(RenameError::AlreadyExists(to));
        } else {
            None
        };

        self.log_staged(&from, &to);
        self.operations.push(Operation::MoveFile {
            from,
            to,
            displaced,
        });
        Ok(())
    }

    /// Stages a directory move, creating the target's parents on commit.
    pub fn move_directory(&mut self, from: PathBuf, to: PathBuf) -> Result<()> {
        self.ensure_building()?;

        if !from.is_dir() {
            return Err(RenameError::SourceMissing(from));
        }
        if to.exists() {
            return Err(RenameError::AlreadyExists(to));
        }

        self.log_staged(&from, &to);
        self.operations.push(Operation::MoveDirectory { from, to });
        Ok(())
    }

    fn log_staged(&self, from: &Path, to: &Path) {
        if self.dry_run {
            log::info!("Would move: {} → {}", from.display(), to.display());
        } else {
            log::debug!("Staging move: {} → {}", from.display(), to.display());
        }
    }

    fn ensure_building(&self) -> Result<()> {
        if self.state != TransactionState::Building {
            return Err(RenameError::Other(anyhow::anyhow!(
                "Cannot modify transaction after commit"
            )));
        }
        Ok(())
    }

    /// Re-checks staged moves against the disk right before executing them.
    fn validate(&self) -> Result<()> {
        let mut targets = HashSet::new();

        for op in &self.operations {
            let (from, to) = op.endpoints();

            if !from.exists() {
                return Err(RenameError::SourceMissing(from.to_path_buf()));
            }

            let replaces = matches!(op, Operation::MoveFile { displaced: Some(_), .. });
            if to.exists() && !replaces {
                return Err(RenameError::AlreadyExists(to.to_path_buf()));
            }

            if !targets.insert(to) {
                return Err(RenameError::Other(anyhow::anyhow!(
                    "Duplicate move target: {}",
                    to.display()
                )));
            }
        }

        Ok(())
    }

    /// Validates, then executes the moves in staging order.
    ///
    /// If a move fails, the moves that already ran are undone before the
    /// error is returned.
    pub fn commit(&mut self) -> Result<()> {
        self.ensure_building()?;

        if self.dry_run {
            self.state = TransactionState::Committed;
            return Ok(());
        }

        if let Err(e) = self.validate() {
            self.state = TransactionState::Failed;
            return Err(e);
        }

        if let Err(e) = self.execute() {
            self.state = TransactionState::Failed;
            log::warn!("Commit failed, undoing {} executed move(s)", self.executed);

            return Err(match self.undo() {
                Ok(()) => e,
                Err(undo_err) => RenameError::Other(anyhow::anyhow!("{}; {}", e, undo_err)),
            });
        }

        self.state = TransactionState::Committed;
        Ok(())
    }

    fn execute(&mut self) -> Result<()> {
        for op in &self.operations {
            let (from, to) = op.endpoints();
            relocate(from, to, op.is_dir())?;
            log::info!("Moved: {} → {}", from.display(), to.display());
            self.executed += 1;
        }
        Ok(())
    }

    fn undo(&mut self) -> Result<()> {
        let mut errors = Vec::new();

        for op in self.operations[..self.executed].iter().rev() {
            let (from, to) = op.endpoints();

            if to.exists() {
                if let Err(e) = relocate(to, from, op.is_dir()) {
                    errors.push(format!("Failed to move back {}: {}", to.display(), e));
                    continue;
                }
            }

            if let Operation::MoveFile {
                displaced: Some(bytes),
                ..
            } = op
            {
                if let Err(e) = fs::write(to, bytes) {
                    errors.push(format!("Failed to restore {}: {}", to.display(), e));
                }
            }
        }

        self.executed = 0;

        if errors.is_empty() {
            log::info!("Rollback completed");
            Ok(())
        } else {
            Err(RenameError::RollbackFailed(errors.join("; ")))
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if self.state == TransactionState::Building && !self.operations.is_empty() && !self.dry_run
        {
            log::warn!("Transaction dropped without commit");
        }
    }
}

/// Moves `from` to `to`, creating parents as needed.
///
/// A cross-filesystem copy that fails part-way removes the partial copy so
/// the source stays the only version on disk.
fn relocate(from: &Path, to: &Path, is_dir: bool) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }

    if same_filesystem(from, to)? {
        return fs::rename(from, to).map_err(|e| {
            RenameError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to move {} → {}: {}", from.display(), to.display(), e),
            ))
        });
    }

    log::debug!("Cross-filesystem move, copying {}", from.display());

    let copied = if is_dir {
        copy_dir_recursive(from, to)
    } else {
        fs::copy(from, to).map(|_| ()).map_err(Into::into)
    };

    if let Err(e) = copied {
        let _ = if is_dir {
            fs::remove_dir_all(to)
        } else {
            fs::remove_file(to)
        };
        return Err(e);
    }

    if is_dir {
        fs::remove_dir_all(from)?;
    } else {
        fs::remove_file(from)?;
    }

    Ok(())
}

/// Whether `rename()` can move `from` into `to`'s parent directory.
fn same_filesystem(from: &Path, to: &Path) -> Result<bool> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        let from_dev = fs::metadata(from)?.dev();
        let to_dev = fs::metadata(to.parent().unwrap_or(to))?.dev();
        Ok(from_dev == to_dev)
    }

    #[cfg(not(unix))]
    {
        let drive = |p: &Path| p.components().next().map(|c| c.as_os_str().to_owned());
        Ok(drive(from) == drive(to))
    }
}

fn copy_dir_recursive(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to)?;

    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
