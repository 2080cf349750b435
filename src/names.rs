//! Identifier derivation.
//!
//! Every name the rename touches is derived from two inputs: the template's
//! placeholder name and the user-supplied new name. Derivation is pure and
//! performs no validation; an unusual name is passed through as-is.

use crate::rewrite::Replacement;

/// Placeholder name the template project is generated with.
pub const DEFAULT_OLD_NAME: &str = "base_app";

/// Prefix of the embedded native library's crate/pod name.
pub const LIBRARY_PREFIX: &str = "rust_lib_";

/// Reverse-domain prefix of the application bundle identifier.
pub const BUNDLE_PREFIX: &str = "com.example.";

/// Lower-cases `raw` and turns spaces into underscores.
///
/// ```
/// assert_eq!(rename_project::names::normalize("My Cool App"), "my_cool_app");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_")
}

/// `rust_lib_<name>`
pub fn library_name(name: &str) -> String {
    format!("{LIBRARY_PREFIX}{name}")
}

/// `com.example.<name>`
pub fn bundle_id(name: &str) -> String {
    format!("{BUNDLE_PREFIX}{name}")
}

/// Human-readable app name handed to the platform app-name tool.
///
/// Underscores become spaces and each word is title-cased.
pub fn display_name(name: &str) -> String {
    title_case(&name.replace('_', " "))
}

/// Upper-cases the first letter of every run of cased characters and
/// lower-cases the rest of the run.
///
/// Digits and punctuation end a run, so `app2go` becomes `App2Go`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;

    for ch in text.chars() {
        if prev_cased {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_cased = ch.is_lowercase() || ch.is_uppercase();
    }

    out
}

/// The complete set of old/new identifiers for one rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifiers {
    pub old_name: String,
    pub new_name: String,
    pub old_library: String,
    pub new_library: String,
    pub old_bundle_id: String,
    pub new_bundle_id: String,
    /// Title-cased form of `new_name` for platform display names.
    pub display_name: String,
}

impl Identifiers {
    /// Derives all identifiers. `raw_new_name` is normalized first;
    /// `old_name` is used verbatim.
    pub fn derive(old_name: &str, raw_new_name: &str) -> Self {
        let new_name = normalize(raw_new_name);

        Self {
            old_library: library_name(old_name),
            new_library: library_name(&new_name),
            old_bundle_id: bundle_id(old_name),
            new_bundle_id: bundle_id(&new_name),
            display_name: display_name(&new_name),
            old_name: old_name.to_string(),
            new_name,
        }
    }

    /// True when the new name equals the old one.
    pub fn is_noop(&self) -> bool {
        self.old_name == self.new_name
    }

    /// The three tree-wide substitution passes, in application order:
    /// project name, native library name, bundle identifier.
    pub fn replacements(&self) -> [Replacement; 3] {
        [
            Replacement::new(&self.old_name, &self.new_name),
            Replacement::new(&self.old_library, &self.new_library),
            Replacement::new(&self.old_bundle_id, &self.new_bundle_id),
        ]
    }
}
