//! External `vulcanize` engine
//!
//! Runs the Polymer `vulcanize` command-line tool and captures the
//! flattened document from stdout.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::{FlattenError, FlattenOptions, Flattener};

pub const DEFAULT_VULCANIZE_BIN: &str = "vulcanize";

#[derive(Debug, Clone)]
pub struct VulcanizeCli {
    program: PathBuf,
}

impl VulcanizeCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check if the executable can be started
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Command-line arguments for one invocation.
    ///
    /// Redirect paths are made absolute under `root` so the tool resolves
    /// them the same way regardless of its own working directory.
    pub fn args(&self, root: &Path, entry: &Path, options: &FlattenOptions) -> Vec<String> {
        let mut args = Vec::new();
        if options.inline_scripts {
            args.push("--inline-scripts".to_string());
        }
        if options.inline_css {
            args.push("--inline-css".to_string());
        }
        if options.strip_comments {
            args.push("--strip-comments".to_string());
        }
        for exclude in options.excludes.iter() {
            args.push("--exclude".to_string());
            args.push(exclude.to_string());
        }
        for redirect in &options.redirects {
            args.push("--redirect".to_string());
            args.push(format!(
                "{}|{}",
                root.join(redirect.from_path()).display(),
                root.join(redirect.to_path()).display()
            ));
        }
        args.push(entry.display().to_string());
        args
    }
}

impl Default for VulcanizeCli {
    fn default() -> Self {
        Self::new(DEFAULT_VULCANIZE_BIN)
    }
}

impl Flattener for VulcanizeCli {
    fn name(&self) -> &'static str {
        "vulcanize"
    }

    fn flatten(
        &self,
        root: &Path,
        entry: &Path,
        options: &FlattenOptions,
    ) -> Result<String, FlattenError> {
        let args = self.args(root, entry, options);
        tracing::debug!(program = %self.program.display(), args = args.len(), "spawning vulcanize");

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(root)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| FlattenError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(FlattenError::Engine {
                message: if stderr.is_empty() {
                    format!("vulcanize exited with status {:?}", output.status.code())
                } else {
                    stderr
                },
            });
        }

        String::from_utf8(output.stdout).map_err(|e| FlattenError::Engine {
            message: format!("vulcanize produced invalid UTF-8: {}", e),
        })
    }
}
