//! Get action - fetch a package checkout without building it.

use std::path::Path;

use anyhow::Result;

use super::ProcessFailed;
use crate::registry::RegistryConfig;
use crate::runtime::Runtime;

pub struct GetAction<'a, R: Runtime> {
    runtime: &'a R,
    config: &'a RegistryConfig,
}

impl<'a, R: Runtime> GetAction<'a, R> {
    pub fn new(runtime: &'a R, config: &'a RegistryConfig) -> Self {
        Self { runtime, config }
    }

    /// Clones the package repository into `./<name>`. The checkout is
    /// the deliverable, so nothing is cleaned up here.
    pub fn get(&self, name: &str) -> Result<()> {
        let url = self.config.clone_url(name);
        let code = self.runtime.git_clone(&url, Path::new(name))?;
        if code != 0 {
            return Err(ProcessFailed {
                program: "git",
                code,
            }
            .into());
        }
        Ok(())
    }
}
