//! FakeClearTool helper for integration tests.
//!
//! Provides a temporary directory holding an executable `cleartool` shell
//! script. For a sub-command `<cmd>` the script prints `<cmd>.out` to
//! stdout, `<cmd>.err` to stderr, and exits with the code in `<cmd>.code`
//! (0 when absent). Every invocation is appended to `calls.log`.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCRIPT: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
echo "$*" >> "$dir/calls.log"
[ -f "$dir/$1.out" ] && cat "$dir/$1.out"
[ -f "$dir/$1.err" ] && cat "$dir/$1.err" >&2
if [ -f "$dir/$1.code" ]; then
    exit "$(cat "$dir/$1.code")"
fi
exit 0
"#;

/// A scripted cleartool in a temporary directory.
///
/// The directory is removed when the FakeClearTool is dropped.
pub struct FakeClearTool {
    dir: TempDir,
}

impl FakeClearTool {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let program = dir.path().join("cleartool");
        fs::write(&program, SCRIPT).expect("Failed to write fake cleartool");
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake cleartool executable");
        Self { dir }
    }

    /// Path to the script, for `ClearToolExecutor::with_program`.
    pub fn program(&self) -> PathBuf {
        self.dir.path().join("cleartool")
    }

    /// Directory for element files used by the test.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file next to the script and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Standard output of `command`.
    pub fn reply(&self, command: &str, stdout: &str) {
        self.write_file(&format!("{}.out", command), stdout);
    }

    /// Standard error and exit code of `command`.
    pub fn fail(&self, command: &str, stderr: &str, exit_code: i32) {
        self.write_file(&format!("{}.err", command), stderr);
        self.write_file(&format!("{}.code", command), &exit_code.to_string());
    }

    /// Standard error of `command` with a zero exit code.
    pub fn warn(&self, command: &str, stderr: &str) {
        self.write_file(&format!("{}.err", command), stderr);
    }

    /// Argument lines of every invocation so far.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
