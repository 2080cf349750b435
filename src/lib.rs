#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod fs;
pub mod logging;
pub mod names;
pub mod report;
pub mod rewrite;
pub mod steps;

pub use error::*;

/// Parses the command line and runs the rename.
///
/// Help and version requests exit the process directly. Any other parse
/// failure comes back as [`RenameError::Usage`].
pub fn run() -> Result<()> {
    use clap::Parser;
    use clap::error::ErrorKind;

    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return Err(RenameError::Usage(e.render().to_string())),
    };

    logging::init(cli.verbose, cli.quiet);
    if cli.no_color {
        colored::control::set_override(false);
    }

    steps::rename::execute(cli.rename)
}
