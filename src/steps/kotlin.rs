//! Relocates the Android Kotlin package directory.
//!
//! `android/app/src/main/kotlin/com/example/<old>` becomes
//! `.../com/example/<new>`, then the `package` declaration at the top of
//! `MainActivity.kt` is updated in the moved directory. A patch failure is
//! reported on its own and does not undo the move.

use super::Context;
use crate::error::Result;
use crate::fs::Transaction;
use crate::names::{BUNDLE_PREFIX, Identifiers};
use crate::report::Transcript;

use regex::{Captures, Regex};
use std::fs;
use std::path::{Path, PathBuf};

/// Path segments from the project root to the package's parent directory.
pub const KOTLIN_PACKAGE_PARENT: [&str; 7] =
    ["android", "app", "src", "main", "kotlin", "com", "example"];

pub const MAIN_ACTIVITY: &str = "MainActivity.kt";

/// Kotlin package directory for project `name`.
pub fn package_dir(root: &Path, name: &str) -> PathBuf {
    KOTLIN_PACKAGE_PARENT
        .iter()
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
        .join(name)
}

/// Matches a `package com.example.<name>` declaration at the start of a line.
fn package_line(name: &str) -> Result<Regex> {
    let pattern = format!(
        r"(?m)^(\s*package\s+){}\b",
        regex::escape(&format!("{BUNDLE_PREFIX}{name}"))
    );
    Ok(Regex::new(&pattern)?)
}

/// Rewrites the package declaration in Kotlin `source`.
///
/// Returns `None` when no declaration for `ids.old_name` is present.
pub fn patch_package_line(source: &str, ids: &Identifiers) -> Result<Option<String>> {
    let pattern = package_line(&ids.old_name)?;

    if !pattern.is_match(source) {
        return Ok(None);
    }

    let patched = pattern.replace_all(source, |caps: &Captures| {
        format!("{}{}", &caps[1], ids.new_bundle_id)
    });

    Ok(Some(patched.into_owned()))
}

/// Moves the package directory as one transaction.
pub fn relocate(from: &Path, to: &Path, dry_run: bool) -> Result<()> {
    let mut txn = Transaction::new(dry_run);
    txn.move_directory(from.to_path_buf(), to.to_path_buf())?;
    txn.commit()
}

/// Rewrites the package line of the activity at `path` in place.
///
/// Returns `true` when the declaration was (or, in dry-run, would be)
/// changed.
pub fn patch_activity(path: &Path, ids: &Identifiers, dry_run: bool) -> Result<bool> {
    let source = fs::read_to_string(path)?;

    let Some(updated) = patch_package_line(&source, ids)? else {
        log::debug!("No package declaration to update in {}", path.display());
        return Ok(false);
    };

    if !dry_run {
        fs::write(path, updated)?;
    }
    Ok(true)
}

pub fn run(ctx: &Context, out: &mut Transcript) {
    out.step(2, "Renaming Kotlin package directory...");

    let from = package_dir(&ctx.root, &ctx.ids.old_name);
    let to = package_dir(&ctx.root, &ctx.ids.new_name);

    if !from.exists() {
        out.warning(format!("Kotlin directory not found: {}", out.path(&from)));
        return;
    }

    if from == to {
        out.info(format!("Kotlin directory already in place: {}", out.path(&from)));
        return;
    }

    if let Err(e) = relocate(&from, &to, ctx.dry_run) {
        out.error(format!("Failed to rename Kotlin directory: {}", e));
        return;
    }

    out.success(format!(
        "{} Kotlin directory: {} -> {}",
        if ctx.dry_run { "Would move" } else { "Moved" },
        out.path(&from),
        out.path(&to)
    ));

    // In dry-run the activity is still at its old location.
    let activity = (if ctx.dry_run { &from } else { &to }).join(MAIN_ACTIVITY);
    if !activity.is_file() {
        return;
    }

    match patch_activity(&activity, &ctx.ids, ctx.dry_run) {
        Ok(true) => out.success(format!(
            "{} package name in {}",
            if ctx.dry_run { "Would update" } else { "Updated" },
            MAIN_ACTIVITY
        )),
        Ok(false) => {}
        Err(e) => out.error(format!(
            "Failed to update package name in {}: {}",
            out.path(&activity),
            e
        )),
    }
}
