//! Orchestration of a project rename.
//!
//! Runs every step in a fixed order regardless of how earlier steps went.
//! There is no rollback across steps: a relocation that succeeded stays in
//! place even if a later step fails.

use super::{Context, app_name, kotlin, podspec, substitute};
use crate::error::{RenameError, Result};
use crate::names::{DEFAULT_OLD_NAME, Identifiers};
use crate::report::Transcript;
use crate::steps::app_name::DEFAULT_RENAME_TOOL;

use clap::Args;
use clap::builder::NonEmptyStringValueParser;
use colored::Colorize;
use std::path::PathBuf;

/// Manual follow-up commands printed at the end of every run.
pub const NEXT_STEPS: [&str; 4] = [
    "Run 'flutter clean'",
    "Run 'flutter pub get'",
    "If building for iOS: run 'cd ios && pod install && cd ..'",
    "Run 'flutter run' to test your app",
];

/// Arguments of a rename.
#[derive(Args, Debug, Clone)]
pub struct RenameArgs {
    /// New project name (lower-cased, spaces become underscores)
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub new_name: String,

    /// Project root to rename (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Placeholder name the project was generated with
    #[arg(
        long,
        value_name = "NAME",
        default_value = DEFAULT_OLD_NAME,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub old_name: String,

    /// Executable used to set the platform app names
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_RENAME_TOOL)]
    pub rename_tool: String,

    /// Do not touch the platform app names
    #[arg(long)]
    pub skip_app_name: bool,

    /// Show what would change without applying any modifications
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

impl RenameArgs {
    /// Resolves and checks the project root.
    pub fn project_root(&self) -> Result<PathBuf> {
        let root = self.root.clone().unwrap_or_else(|| PathBuf::from("."));

        if !root.is_dir() {
            return Err(RenameError::RootNotFound(root));
        }

        Ok(root)
    }

    /// Builds the step context for this invocation.
    pub fn context(&self) -> Result<Context> {
        Ok(Context {
            root: self.project_root()?,
            ids: Identifiers::derive(&self.old_name, &self.new_name),
            rename_tool: self.rename_tool.clone(),
            dry_run: self.dry_run,
        })
    }
}

/// Executes a project rename.
///
/// ## Steps
///
/// 1. Set the platform app names with the external tool
/// 2. Move the Kotlin package directory and patch `MainActivity.kt`
/// 3. Rename the iOS and macOS podspecs
/// 4. Replace name, library name and bundle id across the tree
/// 5. Print the follow-up checklist
///
/// Only an invalid project root is returned as an error; step failures are
/// reported in the transcript.
pub fn execute(args: RenameArgs) -> Result<()> {
    let ctx = args.context()?;
    log::debug!("Project root: {}", ctx.root.display());
    log::debug!("Identifiers: {:?}", ctx.ids);

    let mut out = Transcript::new(ctx.root.clone());
    run_steps(&ctx, args.skip_app_name, &mut out);
    Ok(())
}

/// Runs all steps against `ctx`, reporting into `out`.
pub fn run_steps(ctx: &Context, skip_app_name: bool, out: &mut Transcript) {
    print_header(ctx, out);

    if skip_app_name {
        out.step(1, "Changing app name with the rename tool...");
        out.info("Skipped (--skip-app-name)");
    } else {
        app_name::run(ctx, out);
    }

    kotlin::run(ctx, out);
    podspec::run(ctx, out);
    substitute::run(ctx, out);

    println!();
    out.banner("Project rename completed!");
    out.print_tally();
    print_next_steps(out);
}

fn print_header(ctx: &Context, out: &Transcript) {
    out.banner("Flutter + Rust Project Renamer");
    out.line(format!(
        "Renaming project from '{}' to '{}'",
        ctx.ids.old_name.yellow(),
        ctx.ids.new_name.green().bold()
    ));
    out.line(format!(
        "Bundle ID: {} -> {}",
        ctx.ids.old_bundle_id, ctx.ids.new_bundle_id
    ));

    if ctx.ids.is_noop() {
        out.info("New name equals the current name; files are rewritten unchanged");
    }

    if ctx.dry_run {
        out.line("DRY RUN - No changes will be made".yellow().bold());
    }
}

fn print_next_steps(out: &Transcript) {
    out.line("\nNext steps:".bold());
    for (idx, step) in NEXT_STEPS.iter().enumerate() {
        out.line(format!("{}. {}", idx + 1, step));
    }
}
