//! Human-facing transcript printed while the rename runs.
//!
//! Every step reports through a [`Transcript`], which prints one annotated
//! line per event to stdout and keeps a tally of warnings and errors for the
//! closing summary. Diagnostics meant for debugging go through `log` instead.

use colored::Colorize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

pub struct Transcript {
    root: PathBuf,
    warnings: usize,
    errors: usize,
}

impl Transcript {
    /// Creates a transcript that shows paths relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            warnings: 0,
            errors: 0,
        }
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Formats `path` relative to the project root with forward slashes.
    pub fn path(&self, path: &Path) -> String {
        display_path(path, &self.root)
    }

    pub fn banner(&self, title: impl Display) {
        println!("{}", format!("=== {} ===", title).bold());
    }

    pub fn line(&self, text: impl Display) {
        println!("{}", text);
    }

    /// Numbered step header, preceded by a blank line.
    pub fn step(&self, number: usize, title: impl Display) {
        println!("\n{}", format!("{}. {}", number, title).cyan().bold());
    }

    pub fn success(&self, text: impl Display) {
        println!("✅ {}", text);
    }

    pub fn info(&self, text: impl Display) {
        println!("{} {}", "ℹ".blue().bold(), text);
    }

    /// Indented follow-up to the previous line.
    pub fn hint(&self, text: impl Display) {
        println!("   {}", text.to_string().dimmed());
    }

    pub fn warning(&mut self, text: impl Display) {
        self.warnings += 1;
        println!("⚠️  {} {}", "Warning:".yellow().bold(), text);
    }

    pub fn error(&mut self, text: impl Display) {
        self.errors += 1;
        println!("❌ {}", text.to_string().red());
    }

    /// Prints the warning/error tally, if there is anything to tally.
    pub fn print_tally(&self) {
        if self.warnings == 0 && self.errors == 0 {
            return;
        }

        println!(
            "{} {} warning{}, {} error{}",
            "Finished with".yellow(),
            self.warnings,
            if self.warnings == 1 { "" } else { "s" },
            self.errors,
            if self.errors == 1 { "" } else { "s" },
        );
    }
}

/// Makes `path` relative to `root` and uses forward slashes.
pub fn display_path(path: &Path, root: &Path) -> String {
    let relative = path
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .ok()
        .or_else(|| pathdiff::diff_paths(path, root))
        .unwrap_or_else(|| path.to_path_buf());

    relative.to_string_lossy().replace('\\', "/")
}
