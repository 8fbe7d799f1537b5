//! Shared testing harness for `complyscribe-sync-upstreams` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Action inputs used by default, keyed by action input name.
pub(crate) const DEFAULT_INPUTS: [(&str, &str); 13] = [
    ("sources", "repoA\nrepoB  \n\nrepoC"),
    ("include-models", "*"),
    ("exclude-models", "none"),
    ("commit-message", "Sync upstream content"),
    ("branch", "sync-upstreams"),
    ("file-patterns", "*.json,*.md"),
    ("committer-name", "sync-bot"),
    ("committer-email", "sync-bot@example.com"),
    ("author-name", "Jordan Doe"),
    ("author-email", "jordan@example.com"),
    ("repo-path", "."),
    ("target-branch", "main"),
    ("config", ".complyscribe/config.yml"),
];

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Binary invocation with a clean environment (only `PATH` is kept).
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("complyscribe-sync-upstreams")
            .expect("Failed to locate complyscribe-sync-upstreams binary");
        cmd.current_dir(&self.work_dir).env_clear();
        if let Some(path) = std::env::var_os("PATH") {
            cmd.env("PATH", path);
        }
        cmd
    }

    /// Binary invocation with every required input set as the runner would.
    pub(crate) fn cli_with_inputs(&self) -> Command {
        let mut cmd = self.cli();
        for (name, value) in DEFAULT_INPUTS {
            cmd.env(input_var(name), value);
        }
        cmd
    }

    /// Write a file under the work directory and return its path.
    pub(crate) fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

/// `INPUT_<NAME>` with hyphens turned into underscores.
pub(crate) fn input_var(name: &str) -> String {
    format!("INPUT_{}", name.to_ascii_uppercase().replace('-', "_"))
}
