//! Shared test fixtures for engine and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use scalekeys::PersistedSettings;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A temp directory holding an isolated config dir and settings document.
pub struct Sandbox {
    /// Keeps the directory alive for the test's duration
    pub dir: TempDir,
}

impl Sandbox {
    /// Creates an empty sandbox.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Path of the settings document inside the sandbox.
    pub fn settings_path(&self) -> PathBuf {
        self.dir.path().join("settings.json")
    }

    /// Host config directory inside the sandbox.
    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Writes raw text as the settings document.
    pub fn write_settings_raw(&self, content: &str) {
        fs::write(self.settings_path(), content).expect("Failed to write settings");
    }

    /// Writes a settings document.
    pub fn write_settings(&self, root: i64, scale: &str) {
        let content = serde_json::to_string(&PersistedSettings::new(root, scale)).unwrap();
        self.write_settings_raw(&content);
    }

    /// Parses the settings document currently on disk.
    pub fn read_settings(&self) -> serde_json::Value {
        read_json(&self.settings_path())
    }
}

/// Reads and parses a JSON file.
pub fn read_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("Failed to read file");
    serde_json::from_str(&content).expect("File should contain JSON")
}

/// Path to the scalekeys binary
pub fn scalekeys_bin() -> String {
    std::env::var("CARGO_BIN_EXE_scalekeys")
        .unwrap_or_else(|_| "target/release/scalekeys".to_string())
}

/// Runs the binary with an isolated config dir and the sandbox settings document.
pub fn run_cli(sandbox: &Sandbox, args: &[&str]) -> Output {
    Command::new(scalekeys_bin())
        .env("SCALEKEYS_CONFIG_DIR", sandbox.config_dir())
        .env_remove("RUST_LOG")
        .arg("--settings")
        .arg(sandbox.settings_path())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Runs the binary with an isolated config dir and no `--settings` flag.
pub fn run_cli_with_config_only(sandbox: &Sandbox, args: &[&str]) -> Output {
    Command::new(scalekeys_bin())
        .env("SCALEKEYS_CONFIG_DIR", sandbox.config_dir())
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, with stderr in the failure message.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "Should parse JSON output ({e}). stdout: {stdout} stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// Expected highlight for C blues, C..B.
pub const C_BLUES: [bool; 12] = [
    true, false, false, true, false, true, true, true, false, false, true, false,
];
