//! User interaction operations (confirmation prompts).

use anyhow::Result;

use super::RealRuntime;

use std::io::{self, BufRead, Write};

/// Core, testable implementation that reads from any BufRead and writes to any Write.
/// This is intentionally free-standing so tests can exercise it without needing a RealRuntime.
pub(crate) fn confirm_with_io<R: BufRead, W: Write>(
    prompt: &str,
    default_yes: bool,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
    write!(output, "{} {} ", prompt, hint)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let response = line.trim().to_lowercase();
    if response.starts_with('y') {
        Ok(true)
    } else if response.starts_with('n') {
        Ok(false)
    } else {
        Ok(default_yes)
    }
}

impl RealRuntime {
    pub(crate) fn confirm_impl(&self, prompt: &str, default_yes: bool) -> Result<bool> {
        // Wire the generic implementation to real stdin/stdout.
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut stdin_lock = stdin.lock();
        confirm_with_io(prompt, default_yes, &mut stdin_lock, &mut stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::confirm_with_io;
    use anyhow::Result;
    use std::io::Cursor;

    #[test]
    fn accepts_yes_answers() -> Result<()> {
        let cases = vec!["y\n", "Y\n", "yes\n", " YES \n", "yeah\n"];
        for case in cases {
            let mut input = Cursor::new(case.as_bytes());
            let mut output = Vec::new();
            let ok = confirm_with_io("Proceed?", false, &mut input, &mut output)?;
            assert!(ok, "expected '{}' to be accepted as yes", case);
        }
        Ok(())
    }

    #[test]
    fn rejects_no_answers() -> Result<()> {
        let cases = vec!["n\n", "N\n", "no\n", " nope \n"];
        for case in cases {
            let mut input = Cursor::new(case.as_bytes());
            let mut output = Vec::new();
            let ok = confirm_with_io("Proceed?", true, &mut input, &mut output)?;
            assert!(!ok, "expected '{}' to be rejected as no", case);
        }
        Ok(())
    }

    #[test]
    fn empty_and_unrecognized_select_the_default() -> Result<()> {
        for case in ["\n", "  \n", "maybe\n"] {
            let mut input = Cursor::new(case.as_bytes());
            let mut output = Vec::new();
            assert!(confirm_with_io("Edit?", true, &mut input, &mut output)?);

            let mut input = Cursor::new(case.as_bytes());
            let mut output = Vec::new();
            assert!(!confirm_with_io("Edit?", false, &mut input, &mut output)?);
        }
        Ok(())
    }

    #[test]
    fn prompt_shows_the_default() -> Result<()> {
        let mut input = Cursor::new(b"\n");
        let mut output = Vec::new();
        let _ = confirm_with_io("Do you want to edit PKGBUILD?", true, &mut input, &mut output)?;
        let out = String::from_utf8(output)?;
        assert_eq!(out, "Do you want to edit PKGBUILD? [Y/n] ");
        Ok(())
    }
}
