//! Scoped temporary build workspace.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, warn};

use crate::runtime::Runtime;

/// Exclusively-owned working directory for one install session.
///
/// Lives at `<temp dir>/<package name>` and is removed when the guard
/// drops, whatever the outcome of the session — including a failed
/// fetch or build, or an unwind through the pipeline.
pub struct Workspace<'a, R: Runtime> {
    runtime: &'a R,
    path: PathBuf,
}

impl<'a, R: Runtime> Workspace<'a, R> {
    /// Creates the workspace directory, replacing any stale one left
    /// behind by a previous run.
    pub fn create(runtime: &'a R, name: &str) -> Result<Self> {
        let path = runtime.temp_dir().join(name);
        if runtime.exists(&path) {
            debug!("Removing stale workspace {:?}", path);
            runtime.remove_dir_all(&path)?;
        }
        runtime.create_dir_all(&path)?;
        Ok(Self { runtime, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: Runtime> Drop for Workspace<'_, R> {
    fn drop(&mut self) {
        if self.runtime.exists(&self.path) {
            debug!("Cleaning up workspace {:?}", self.path);
            if let Err(err) = self.runtime.remove_dir_all(&self.path) {
                warn!("Failed to remove workspace {:?}: {:#}", self.path, err);
            }
        }
    }
}
