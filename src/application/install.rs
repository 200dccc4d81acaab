//! Install action - the fetch, edit, build, cleanup pipeline.

use std::path::Path;

use anyhow::Result;
use log::warn;

use super::ProcessFailed;
use crate::registry::RegistryConfig;
use crate::runtime::Runtime;
use crate::workspace::Workspace;

/// Name of the build recipe inside a fetched package checkout.
const RECIPE_FILE: &str = "PKGBUILD";

/// Install action - fetches a package into a scoped workspace, offers
/// an interactive recipe review, and hands off to the build tool.
pub struct InstallAction<'a, R: Runtime> {
    runtime: &'a R,
    config: &'a RegistryConfig,
}

impl<'a, R: Runtime> InstallAction<'a, R> {
    pub fn new(runtime: &'a R, config: &'a RegistryConfig) -> Self {
        Self { runtime, config }
    }

    /// Runs the full pipeline for `name`.
    ///
    /// Every failure is terminal for this invocation; the workspace is
    /// removed on every exit path, including fetch and build failures.
    pub fn install(&self, name: &str, asdeps: bool) -> Result<()> {
        let workspace = Workspace::create(self.runtime, name)?;

        let url = self.config.clone_url(name);
        let code = self.runtime.git_clone(&url, workspace.path())?;
        if code != 0 {
            return Err(ProcessFailed {
                program: "git",
                code,
            }
            .into());
        }

        self.review_recipe(workspace.path())?;

        let code = self.runtime.run_build(workspace.path(), asdeps)?;
        if code != 0 {
            return Err(ProcessFailed {
                program: "makepkg",
                code,
            }
            .into());
        }

        Ok(())
    }

    /// Offers to open the fetched recipe in the user's editor before
    /// the build. Defaults to yes.
    fn review_recipe(&self, dir: &Path) -> Result<()> {
        if !self
            .runtime
            .confirm("Do you want to edit PKGBUILD?", true)?
        {
            return Ok(());
        }

        let code = self.runtime.edit_file(&dir.join(RECIPE_FILE))?;
        if code != 0 {
            warn!("Editor exited with status {}, keeping the fetched PKGBUILD", code);
        }
        Ok(())
    }
}
