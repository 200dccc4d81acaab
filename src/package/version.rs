//! Best-effort version extraction from remote build descriptors.

use log::debug;

use crate::registry::Registry;

/// Rendered in place of a remote version that could not be resolved.
pub const UNKNOWN_VERSION: &str = "<unknown>";

/// Extracts `"<pkgver>-<pkgrel>"` from a PKGBUILD.
///
/// A PKGBUILD is a shell script, not a machine-validated format, so only
/// the two plain `pkgver=`/`pkgrel=` declarations are trusted. Both must
/// be present and non-empty; a later declaration overrides an earlier
/// one.
pub fn parse_version(descriptor: &str) -> Option<String> {
    let mut pkgver = None;
    let mut pkgrel = None;
    for line in descriptor.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("pkgver=") {
            pkgver = Some(value);
        } else if let Some(value) = line.strip_prefix("pkgrel=") {
            pkgrel = Some(value);
        }
    }
    match (pkgver, pkgrel) {
        (Some(pkgver), Some(pkgrel)) if !pkgver.is_empty() && !pkgrel.is_empty() => {
            Some(format!("{}-{}", pkgver, pkgrel))
        }
        _ => None,
    }
}

/// Fetches and parses the descriptor for `name`.
///
/// Never fails: any transport error or parse miss degrades to `None`,
/// which displays as [`UNKNOWN_VERSION`].
pub async fn resolve_version(registry: &dyn Registry, name: &str) -> Option<String> {
    match registry.descriptor(name).await {
        Ok(descriptor) => parse_version(&descriptor),
        Err(err) => {
            debug!("No descriptor for {}: {:#}", name, err);
            None
        }
    }
}
