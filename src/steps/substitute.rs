//! Tree-wide substitution of the three derived identifiers.

use super::Context;
use crate::report::Transcript;
use crate::rewrite::{PassReport, Replacement, replace_in_tree};

/// Runs the name, library and bundle-id passes in order.
///
/// Each pass walks the whole tree again. Returns one report per pass.
pub fn run(ctx: &Context, out: &mut Transcript) -> Vec<PassReport> {
    out.step(4, "Performing find and replace across all files...");

    let mut reports = Vec::new();

    for replacement in ctx.ids.replacements() {
        let report = replace_in_tree(&ctx.root, &replacement, None, ctx.dry_run);
        report_pass(&replacement, &report, ctx.dry_run, out);
        reports.push(report);
    }

    reports
}

/// Prints one error line per failed file, then the pass summary.
fn report_pass(
    replacement: &Replacement,
    report: &PassReport,
    dry_run: bool,
    out: &mut Transcript,
) {
    for failure in &report.failures {
        out.error(format!(
            "Error replacing in {}: {}",
            out.path(&failure.path),
            failure.message
        ));
    }

    out.success(format!(
        "{} '{}' with '{}' in {} file{}",
        if dry_run { "Would replace" } else { "Replaced" },
        replacement.old,
        replacement.new,
        report.rewritten,
        if report.rewritten == 1 { "" } else { "s" }
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::{DEFAULT_OLD_NAME, Identifiers};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_three_passes_over_tree() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("pubspec.yaml"), "name: base_app\n").unwrap();
        fs::write(
            root.join("build.gradle"),
            "applicationId \"com.example.base_app\"\n",
        )
        .unwrap();
        fs::write(root.join("icon.png"), [0x89u8, 0xff, 0x00]).unwrap();

        let ctx = Context {
            root: root.to_path_buf(),
            ids: Identifiers::derive(DEFAULT_OLD_NAME, "Shop"),
            rename_tool: "unused".to_string(),
            dry_run: false,
        };
        let mut out = Transcript::new(root);
        let reports = run(&ctx, &mut out);

        assert_eq!(reports.len(), 3);
        // Every text file is rewritten on every pass.
        assert!(reports.iter().all(|r| r.rewritten == 2 && r.binary == 1));
        // The first pass already covers the derived identifiers.
        assert_eq!(reports[0].occurrences, 2);
        assert_eq!(reports[1].occurrences, 0);
        assert_eq!(reports[2].occurrences, 0);
        assert_eq!(
            fs::read_to_string(root.join("build.gradle")).unwrap(),
            "applicationId \"com.example.shop\"\n"
        );
    }

    #[test]
    fn test_failed_files_are_reported_as_errors() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("lib")).unwrap();
        fs::write(root.join("pubspec.yaml"), "name: base_app\n").unwrap();

        let replacement = Replacement::new("base_app", "shop");
        let mut report = replace_in_tree(root, &replacement, None, false);
        let dir = root.join("lib");
        report.record(&dir, crate::rewrite::replace_in_file(&dir, &replacement, false));

        let mut out = Transcript::new(root);
        report_pass(&replacement, &report, false, &mut out);

        assert_eq!(out.errors(), 1);
        assert_eq!(report.rewritten, 1);
        assert_eq!(
            fs::read_to_string(root.join("pubspec.yaml")).unwrap(),
            "name: shop\n"
        );
    }
}
