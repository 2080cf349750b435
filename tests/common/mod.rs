//! Shared fixtures for rename-project integration tests.
//!
//! These tests build a miniature `base_app` project on disk and drive the
//! compiled binary against it.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(unused)]
pub const MAIN_ACTIVITY: &str = "package com.example.base_app

import io.flutter.embedding.android.FlutterActivity

class MainActivity : FlutterActivity()
";

#[allow(unused)]
pub const PODSPEC: &str = "Pod::Spec.new do |s|
  s.name             = 'rust_lib_base_app'
  s.version          = '0.0.1'
end
";

/// PNG-like bytes that are not valid UTF-8 but embed the old name.
#[allow(unused)]
pub const ICON: &[u8] = b"\x89PNG\r\n\x1a\n\xff\xfe base_app \x00\x01";

#[allow(unused)]
pub fn kotlin_dir(root: &Path, name: &str) -> PathBuf {
    root.join("android/app/src/main/kotlin/com/example")
        .join(name)
}

#[allow(unused)]
pub fn podspec(root: &Path, platform: &str, name: &str) -> PathBuf {
    root.join("rust_builder")
        .join(platform)
        .join(format!("rust_lib_{name}.podspec"))
}

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Creates a project tree as generated from the `base_app` template.
#[allow(unused)]
pub fn create_base_app_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write(
        root,
        "pubspec.yaml",
        b"name: base_app
description: A Flutter + Rust app.

dependencies:
  rust_lib_base_app:
    path: rust_builder
",
    );
    write(
        root,
        "lib/main.dart",
        b"import 'package:base_app/src/rust/frb_generated.dart';

Future<void> main() async {
  await RustLib.init();
}
",
    );
    write(
        root,
        "android/app/build.gradle",
        b"android {
    namespace = \"com.example.base_app\"
    defaultConfig {
        applicationId = \"com.example.base_app\"
    }
}
",
    );
    write(
        root,
        "android/app/src/main/kotlin/com/example/base_app/MainActivity.kt",
        MAIN_ACTIVITY.as_bytes(),
    );
    write(
        root,
        "rust/Cargo.toml",
        b"[package]
name = \"rust_lib_base_app\"
version = \"0.1.0\"
",
    );
    write(
        root,
        "rust_builder/ios/rust_lib_base_app.podspec",
        PODSPEC.as_bytes(),
    );
    write(
        root,
        "rust_builder/macos/rust_lib_base_app.podspec",
        PODSPEC.as_bytes(),
    );
    write(root, "assets/icon.png", ICON);

    temp
}

/// Runs the binary in `root` with a tool that is guaranteed to be missing.
#[allow(unused)]
pub fn run_rename(root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("rename-project");
    cmd.args(args)
        .arg("--rename-tool")
        .arg("rename-project-test-missing-tool")
        .arg("--no-color")
        .env_remove("RUST_LOG")
        .current_dir(root);

    cmd.assert()
}

/// Counts occurrences of `needle` in every UTF-8 file under `root`.
#[allow(unused)]
pub fn count_in_tree(root: &Path, needle: &str) -> usize {
    let mut total = 0;
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else if let Ok(text) = fs::read_to_string(&path) {
                total += text.matches(needle).count();
            }
        }
    }

    total
}
