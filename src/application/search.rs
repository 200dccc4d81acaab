//! Search action - queries the registry and reconciles installed state.

use anyhow::Result;

use crate::package::{self, Candidate, Status};
use crate::registry::Registry;
use crate::runtime::Runtime;

/// One reconciled search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRow {
    pub candidate: Candidate,
    /// Locally installed version, `None` when not installed.
    pub installed: Option<String>,
    /// Remote version resolution result; the outer `None` means fast
    /// mode skipped resolution, the inner one that it failed.
    pub remote: Option<Option<String>>,
}

impl SearchRow {
    /// Installed-state classification; `None` in fast mode, where the
    /// remote version was never resolved.
    pub fn status(&self) -> Option<Status> {
        self.remote
            .as_ref()
            .map(|remote| package::classify(remote.as_deref(), self.installed.as_deref()))
    }
}

/// Search action - one registry call, then one installed-state query
/// per candidate, plus one descriptor fetch each unless fast mode is
/// on. Strictly sequential; candidates keep registry order.
pub struct SearchAction<'a, R: Runtime> {
    runtime: &'a R,
    registry: &'a dyn Registry,
}

impl<'a, R: Runtime> SearchAction<'a, R> {
    pub fn new(runtime: &'a R, registry: &'a dyn Registry) -> Self {
        Self { runtime, registry }
    }

    #[tracing::instrument(skip(self))]
    pub async fn search(&self, term: &str, fast: bool) -> Result<Vec<SearchRow>> {
        let candidates = self.registry.search(term).await?;

        let mut rows = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let installed = self.runtime.installed_version(&candidate.name);
            let remote = if fast {
                None
            } else {
                Some(package::resolve_version(self.registry, &candidate.name).await)
            };
            rows.push(SearchRow {
                candidate,
                installed,
                remote,
            });
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MockRegistry;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;

    fn foo_candidate() -> Candidate {
        Candidate {
            name: "foo".to_string(),
            description: "A tool".to_string(),
            popularity: 5,
        }
    }

    #[tokio::test]
    async fn resolves_and_classifies_an_installed_candidate() {
        let mut registry = MockRegistry::new();
        registry
            .expect_search()
            .with(eq("foo"))
            .returning(|_| Ok(vec![foo_candidate()]));
        registry
            .expect_descriptor()
            .with(eq("foo"))
            .returning(|_| Ok("pkgver=2.0\npkgrel=1\n".to_string()));

        let mut runtime = MockRuntime::new();
        runtime
            .expect_installed_version()
            .with(eq("foo"))
            .returning(|_| Some("2.0-1".to_string()));

        let rows = SearchAction::new(&runtime, &registry)
            .search("foo", false)
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].remote, Some(Some("2.0-1".to_string())));
        assert_eq!(rows[0].installed, Some("2.0-1".to_string()));
        assert_eq!(rows[0].status(), Some(Status::UpToDate));
    }

    #[tokio::test]
    async fn unreachable_descriptor_degrades_to_unknown() {
        let mut registry = MockRegistry::new();
        registry
            .expect_search()
            .returning(|_| Ok(vec![foo_candidate()]));
        registry
            .expect_descriptor()
            .returning(|_| Err(anyhow::anyhow!("404")));

        let mut runtime = MockRuntime::new();
        runtime
            .expect_installed_version()
            .returning(|_| Some("2.0-1".to_string()));

        let rows = SearchAction::new(&runtime, &registry)
            .search("foo", false)
            .await
            .unwrap();

        assert_eq!(rows[0].remote, Some(None));
        assert_eq!(rows[0].status(), Some(Status::UnknownRemote));
    }

    #[tokio::test]
    async fn fast_mode_never_fetches_descriptors() {
        let mut registry = MockRegistry::new();
        registry
            .expect_search()
            .returning(|_| Ok(vec![foo_candidate()]));
        registry.expect_descriptor().never();

        let mut runtime = MockRuntime::new();
        runtime.expect_installed_version().returning(|_| None);

        let rows = SearchAction::new(&runtime, &registry)
            .search("foo", true)
            .await
            .unwrap();

        assert_eq!(rows[0].remote, None);
        assert_eq!(rows[0].status(), None);
    }

    #[tokio::test]
    async fn rows_keep_registry_order() {
        let mut registry = MockRegistry::new();
        registry.expect_search().returning(|_| {
            Ok(vec![
                Candidate {
                    name: "zeta".to_string(),
                    description: String::new(),
                    popularity: 1,
                },
                Candidate {
                    name: "alpha".to_string(),
                    description: String::new(),
                    popularity: 9,
                },
            ])
        });

        let mut runtime = MockRuntime::new();
        runtime.expect_installed_version().returning(|_| None);

        let rows = SearchAction::new(&runtime, &registry)
            .search("a", true)
            .await
            .unwrap();

        let names: Vec<&str> = rows.iter().map(|row| row.candidate.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[tokio::test]
    async fn search_failure_propagates() {
        let mut registry = MockRegistry::new();
        registry
            .expect_search()
            .returning(|_| Err(anyhow::anyhow!("registry unreachable")));

        let runtime = MockRuntime::new();

        let result = SearchAction::new(&runtime, &registry)
            .search("foo", false)
            .await;
        assert!(result.is_err());
    }
}
