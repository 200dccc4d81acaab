//! Application actions, one per CLI action.

mod get;
mod install;
mod search;

pub use get::GetAction;
pub use install::InstallAction;
pub use search::{SearchAction, SearchRow};

/// An external tool finished with a non-zero status.
///
/// Carries the tool's exit code so `main` can propagate it verbatim as
/// the process exit status.
#[derive(Debug)]
pub struct ProcessFailed {
    pub program: &'static str,
    pub code: i32,
}

impl std::fmt::Display for ProcessFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed with exit status {}", self.program, self.code)
    }
}

impl std::error::Error for ProcessFailed {}

/// Process exit status for a failed invocation: a failed external tool
/// supplies its own code, everything else exits 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ProcessFailed>()
        .map(|failed| failed.code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_failed_supplies_its_exit_code() {
        let err = anyhow::Error::from(ProcessFailed {
            program: "makepkg",
            code: 4,
        });
        assert_eq!(exit_code(&err), 4);
        assert_eq!(err.to_string(), "makepkg failed with exit status 4");
    }

    #[test]
    fn other_errors_exit_one() {
        let err = anyhow::anyhow!("no network");
        assert_eq!(exit_code(&err), 1);
    }
}
