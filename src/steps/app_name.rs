//! Sets the platform-visible app name through the external `rename` tool.
//!
//! The tool is the Dart `rename` package
//! (`flutter pub global activate rename`). Running it is best-effort: a
//! missing tool or a failing run only produces a warning.

use super::Context;
use crate::error::{RenameError, Result};
use crate::report::Transcript;

use std::path::Path;
use std::process::Command;

/// Default executable name of the app-name tool.
pub const DEFAULT_RENAME_TOOL: &str = "rename";

/// Platforms whose display name is updated.
pub const APP_NAME_TARGETS: &str = "ios,android,macos,windows,linux,web";

/// Arguments passed to the tool for a given display name.
pub fn tool_args(display_name: &str) -> [&str; 5] {
    [
        "setAppName",
        "--targets",
        APP_NAME_TARGETS,
        "--value",
        display_name,
    ]
}

/// Shell-style rendering of the full command, for dry runs and messages.
pub fn command_line(tool: &str, display_name: &str) -> String {
    std::iter::once(tool)
        .chain(tool_args(display_name))
        .map(quote)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(char::is_whitespace) {
        format!("\"{}\"", arg)
    } else {
        arg.to_string()
    }
}

/// Runs the tool in `root` and waits for it.
///
/// Output is inherited so the tool's own messages show up in the transcript.
pub fn set_app_name(tool: &str, display_name: &str, root: &Path) -> Result<()> {
    log::info!("Running {}", command_line(tool, display_name));

    let status = Command::new(tool)
        .args(tool_args(display_name))
        .current_dir(root)
        .status()
        .map_err(|source| RenameError::ToolUnavailable {
            tool: tool.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(RenameError::ToolFailed {
            tool: tool.to_string(),
            status,
        });
    }

    Ok(())
}

pub fn run(ctx: &Context, out: &mut Transcript) {
    out.step(1, "Changing app name with the rename tool...");

    if ctx.dry_run {
        out.info(format!(
            "Would run: {}",
            command_line(&ctx.rename_tool, &ctx.ids.display_name)
        ));
        return;
    }

    match set_app_name(&ctx.rename_tool, &ctx.ids.display_name, &ctx.root) {
        Ok(()) => out.success(format!("App name set to '{}'", ctx.ids.display_name)),
        Err(e) => {
            out.warning(format!("Could not run rename tool: {}", e));
            out.hint("You may need to install it: flutter pub global activate rename");
            out.hint("Or change the app name manually in each platform's configuration files");
        }
    }
}
