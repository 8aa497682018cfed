//! Common test utilities for tb-vulcanize CLI tests.
//!
//! - `Project`: temp project tree plus helpers to run the binary in it
//! - `tensorboard_project()`: a small component tree shaped like TensorBoard's

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub const ENTRY: &str = "components/tf_tensorboard/tf-tensorboard.html";

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl TestResult {
    /// Non-empty stdout lines parsed as JSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON line {l:?}: {e}")))
            .collect()
    }
}

pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) -> &Self {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel))
            .unwrap_or_else(|e| panic!("expected {rel} to be readable: {e}"))
    }

    /// Command for the binary, run from the project root with a clean environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tb-vulcanize"));
        cmd.current_dir(self.root())
            .env_remove("RUST_LOG")
            .env_remove("TB_VULCANIZE_ENGINE")
            .env_remove("TB_VULCANIZE_OUTPUT_DIR")
            .env_remove("TB_VULCANIZE_BIN");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.command().args(args).output().unwrap().into()
    }
}

/// Components `tf_foo`, `tf-bar`, `vz_baz`, `other_thing`, plus the
/// `tf_tensorboard` entry and a `tf_imports` shell around a vendored script.
/// `tf-bar` only takes part in the inventory; nothing imports it.
pub fn tensorboard_project() -> Project {
    let project = Project::empty();
    project
        .write(
            ENTRY,
            concat!(
                "<link rel=\"import\" href=\"../other_thing/other-thing.html\">\n",
                "<link rel=\"import\" href=\"../tf-foo/tf-foo.html\">\n",
                "<link rel=\"import\" href=\"../vz-baz/vz-baz.html\">\n",
                "<link rel=\"import\" href=\"../tf-imports/d3.html\">\n",
                "<!-- entry point -->\n",
                "<dom-module id=\"tf-tensorboard\"></dom-module>\n",
            ),
        )
        .write("components/other_thing/other-thing.html", "<script>window.other = 1;</script>")
        .write(
            "components/tf_foo/tf-foo.html",
            "<link rel=\"stylesheet\" href=\"tf-foo.css\"><script src=\"tf-foo.js\"></script>",
        )
        .write("components/tf_foo/tf-foo.css", ".foo { display: block; }")
        .write("components/tf_foo/tf-foo.js", "Polymer({is: 'tf-foo'});")
        .write("components/tf-bar/tf-bar.html", "<dom-module id=\"tf-bar\"></dom-module>")
        .write("components/vz_baz/vz-baz.html", "<dom-module id=\"vz-baz\"></dom-module>")
        .write("components/tf_imports/d3.html", "<script src=\"d3.js\"></script>")
        .write("components/tf_imports/d3.js", "window.d3 = {};");
    project
}
