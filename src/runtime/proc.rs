//! External tool invocation (git, pacman, makepkg, editor).
//!
//! Tools are launched with explicit argument vectors, never through a
//! shell. Interactive tools inherit the standard streams; only the
//! package database query captures its output.

use std::path::Path;
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};
use log::debug;

use super::RealRuntime;

/// Used when `EDITOR` is unset.
const DEFAULT_EDITOR: &str = "vim";

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn git_clone_impl(&self, url: &str, dest: &Path) -> Result<i32> {
        debug!("Cloning {} into {:?}...", url, dest);

        let status = Command::new("git")
            .arg("clone")
            .arg("--")
            .arg(url)
            .arg(dest)
            .status()
            .context("Failed to launch git clone")?;

        Ok(exit_code(status))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn installed_version_impl(&self, name: &str) -> Option<String> {
        // A non-zero exit just means "not installed"; so does a missing
        // pacman binary.
        let output = Command::new("pacman").arg("-Q").arg(name).output().ok()?;
        if !output.status.success() {
            return None;
        }
        version_from_query(&String::from_utf8_lossy(&output.stdout))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn run_build_impl(&self, dir: &Path, asdeps: bool) -> Result<i32> {
        debug!("Running makepkg in {:?} (asdeps: {})...", dir, asdeps);

        let mut command = Command::new("makepkg");
        command.arg("-si");
        if asdeps {
            command.arg("--asdeps");
        }
        let status = command
            .current_dir(dir)
            .status()
            .context("Failed to launch makepkg")?;

        Ok(exit_code(status))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn edit_file_impl(&self, path: &Path) -> Result<i32> {
        let editor = self
            .env_var_impl("EDITOR")
            .unwrap_or_else(|_| DEFAULT_EDITOR.to_string());

        debug!("Opening {:?} in {}...", path, editor);

        let status = Command::new(&editor)
            .arg(path)
            .status()
            .with_context(|| format!("Failed to launch editor '{}'", editor))?;

        Ok(exit_code(status))
    }
}

/// Maps a wait status to an exit code; termination without a code (a
/// signal) counts as failure.
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

/// Second whitespace-delimited token of the first line of a package
/// database query, i.e. the installed version in `"<name> <version>"`.
pub(crate) fn version_from_query(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .next()?
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
}
