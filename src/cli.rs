use crate::steps::rename::RenameArgs;
use clap::{ArgAction, Parser};

/// Rename a Flutter + Rust app project generated from the `base_app` template.
#[derive(Parser, Debug)]
#[command(name = "rename-project", version)]
pub struct Cli {
    #[command(flatten)]
    pub rename: RenameArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_positional() {
        let cli = Cli::try_parse_from(["rename-project", "My Cool App"]).unwrap();

        assert_eq!(cli.rename.new_name, "My Cool App");
        assert_eq!(cli.rename.old_name, "base_app");
        assert_eq!(cli.rename.rename_tool, "rename");
        assert!(cli.rename.root.is_none());
        assert!(!cli.rename.dry_run);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let err = Cli::try_parse_from(["rename-project"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        let err = Cli::try_parse_from(["rename-project", "one", "two"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(Cli::try_parse_from(["rename-project", ""]).is_err());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "rename-project",
            "shop",
            "--root",
            "app",
            "--old-name",
            "starter",
            "--rename-tool",
            "/opt/rename",
            "--skip-app-name",
            "-n",
            "-vv",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(cli.rename.root.as_deref(), Some(std::path::Path::new("app")));
        assert_eq!(cli.rename.old_name, "starter");
        assert_eq!(cli.rename.rename_tool, "/opt/rename");
        assert!(cli.rename.skip_app_name);
        assert!(cli.rename.dry_run);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["rename-project", "shop", "-q", "-v"]).is_err());
    }
}
