//! Candidate model and installed-state reconciliation.

mod version;

pub use version::{UNKNOWN_VERSION, parse_version, resolve_version};

/// One remote package discovered by a registry search.
///
/// Carries only what the search response provides; versions are
/// resolved separately and the status is always derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Unique name in the registry, used to build fetch URLs.
    pub name: String,
    /// Free-text description, may be empty.
    pub description: String,
    /// Star count, used only for display.
    pub popularity: u64,
}

/// Installed-state classification of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NotInstalled,
    UpToDate,
    Outdated,
    UnknownRemote,
}

/// Classifies a candidate from its remote and installed versions.
///
/// `None` means "unknown" on the remote side and "not installed" on the
/// local side. The result is a pure function of the two inputs.
pub fn classify(remote: Option<&str>, installed: Option<&str>) -> Status {
    match (remote, installed) {
        (_, None) => Status::NotInstalled,
        (None, Some(_)) => Status::UnknownRemote,
        (Some(remote), Some(installed)) if remote == installed => Status::UpToDate,
        _ => Status::Outdated,
    }
}
