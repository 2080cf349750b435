//! Binary entry point for `rename-project`.

use rename_project::RenameError;
use std::process;

fn main() {
    match rename_project::run() {
        Ok(()) => {}
        Err(RenameError::Usage(usage)) => {
            eprintln!("{}", usage.trim_end());
            eprintln!("Example: rename-project my_awesome_app");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
