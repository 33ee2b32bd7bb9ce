//! Shared testing utilities for scriptgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a project directory with an empty `Assets/` store.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(work_dir.join("Assets")).expect("Failed to create asset store");
        Self { root, work_dir }
    }

    /// Project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// `<project>/Assets`
    pub fn assets(&self) -> PathBuf {
        self.work_dir.join("Assets")
    }

    /// Build a command for invoking the compiled `scriptgen` binary in the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("scriptgen").expect("Failed to locate scriptgen binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG").env_remove("SCRIPTGEN_LOG");
        cmd
    }

    /// Run `scriptgen init` and assert success.
    pub fn init(&self) {
        self.cli().arg("init").assert().success();
    }

    /// Create a directory under the asset store.
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.assets().join(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Write a template file into `<project>/<dir>/<Kind>.txt`.
    pub fn write_template(&self, dir: &str, kind: &str, content: &str) {
        let dir = self.work_dir.join(dir);
        fs::create_dir_all(&dir).expect("Failed to create template directory");
        fs::write(dir.join(format!("{}.txt", kind)), content).expect("Failed to write template");
    }

    /// Write `scriptgen.toml` into the project.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("scriptgen.toml"), content).expect("Failed to write config");
    }

    /// Read a file relative to the asset store.
    pub fn read_asset(&self, relative: &str) -> String {
        fs::read_to_string(self.assets().join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Assert that a file or folder exists under the asset store.
    pub fn assert_asset_exists(&self, relative: &str) {
        assert!(self.assets().join(relative).exists(), "{} should exist", relative);
    }

    /// Assert that nothing exists at a path under the asset store.
    pub fn assert_asset_missing(&self, relative: &str) {
        assert!(!self.assets().join(relative).exists(), "{} should not exist", relative);
    }

    /// Sorted entry names directly inside an asset folder.
    pub fn asset_entries(&self, relative: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.assets().join(relative))
            .expect("Failed to read asset folder")
            .map(|entry| entry.expect("Failed to read entry").file_name().to_string_lossy().into())
            .collect();
        names.sort();
        names
    }

    /// Keep the temp root alive for the test's duration.
    pub fn temp_root(&self) -> &Path {
        self.root.path()
    }
}
