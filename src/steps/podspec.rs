//! Renames the CocoaPods podspecs of the native library.

use super::Context;
use crate::error::Result;
use crate::fs::Transaction;
use crate::report::Transcript;

use std::path::{Path, PathBuf};

/// Directory holding the platform plugin wrappers of the native library.
pub const RUST_BUILDER_DIR: &str = "rust_builder";

/// Platforms that ship a podspec.
pub const PODSPEC_PLATFORMS: [&str; 2] = ["ios", "macos"];

/// `rust_builder/<platform>/<library>.podspec`
pub fn podspec_path(root: &Path, platform: &str, library: &str) -> PathBuf {
    root.join(RUST_BUILDER_DIR)
        .join(platform)
        .join(format!("{library}.podspec"))
}

/// Moves one podspec, overwriting a podspec already at `to`.
fn relocate(from: &Path, to: &Path, dry_run: bool) -> Result<()> {
    let mut txn = Transaction::new(dry_run);
    txn.move_file(from.to_path_buf(), to.to_path_buf())?;
    txn.commit()
}

pub fn run(ctx: &Context, out: &mut Transcript) {
    out.step(3, "Renaming podspec files...");

    for platform in PODSPEC_PLATFORMS {
        let from = podspec_path(&ctx.root, platform, &ctx.ids.old_library);
        let to = podspec_path(&ctx.root, platform, &ctx.ids.new_library);

        if !from.exists() {
            out.warning(format!("Podspec file not found: {}", out.path(&from)));
            continue;
        }

        if from == to {
            out.info(format!("Podspec already in place: {}", out.path(&from)));
            continue;
        }

        if to.is_file() {
            log::info!("Replacing existing podspec {}", to.display());
        }

        match relocate(&from, &to, ctx.dry_run) {
            Ok(()) => out.success(format!(
                "{} podspec: {} -> {}",
                if ctx.dry_run { "Would rename" } else { "Renamed" },
                out.path(&from),
                out.path(&to)
            )),
            Err(e) => out.error(format!(
                "Failed to rename podspec {}: {}",
                out.path(&from),
                e
            )),
        }
    }
}
