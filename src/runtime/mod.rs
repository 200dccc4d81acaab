//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over system
//! operations, enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Environment variables and system information
//! - `fs` - File system operations
//! - `proc` - External tool invocation (git, pacman, makepkg, editor)
//! - `user` - User interaction (confirmation prompts)

mod env;
mod fs;
mod proc;
mod user;

use anyhow::Result;
use std::env as std_env;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;
    fn temp_dir(&self) -> PathBuf;

    // Privilege
    fn is_privileged(&self) -> bool;

    // File system
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn remove_dir_all(&self, path: &Path) -> Result<()>;

    // User interaction
    /// Prompt for a yes/no answer. An empty response selects the
    /// default; anything starting with 'y' or 'n' wins over it.
    fn confirm(&self, prompt: &str, default_yes: bool) -> Result<bool>;

    // External tools
    /// Clone the repository at `url` into `dest`, output going to the
    /// inherited standard streams. Returns the tool's exit code.
    fn git_clone(&self, url: &str, dest: &Path) -> Result<i32>;

    /// Installed version of `name` per the local package database, or
    /// `None` when not installed. Never fails.
    fn installed_version(&self, name: &str) -> Option<String>;

    /// Run the build tool in `dir`, blocking until it exits. Returns
    /// the tool's exit code.
    fn run_build(&self, dir: &Path, asdeps: bool) -> Result<i32>;

    /// Open `path` in the user's configured editor, blocking until the
    /// editor exits. Returns the editor's exit code.
    fn edit_file(&self, path: &Path) -> Result<i32>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn temp_dir(&self) -> PathBuf {
        self.temp_dir_impl()
    }

    fn is_privileged(&self) -> bool {
        self.is_privileged_impl()
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        self.remove_dir_all_impl(path)
    }

    fn confirm(&self, prompt: &str, default_yes: bool) -> Result<bool> {
        self.confirm_impl(prompt, default_yes)
    }

    fn git_clone(&self, url: &str, dest: &Path) -> Result<i32> {
        self.git_clone_impl(url, dest)
    }

    fn installed_version(&self, name: &str) -> Option<String> {
        self.installed_version_impl(name)
    }

    fn run_build(&self, dir: &Path, asdeps: bool) -> Result<i32> {
        self.run_build_impl(dir, asdeps)
    }

    fn edit_file(&self, path: &Path) -> Result<i32> {
        self.edit_file_impl(path)
    }
}
