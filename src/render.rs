//! Terminal rendering for search results and diagnostics.

use anstyle::{AnsiColor, Style};

use crate::application::SearchRow;
use crate::package::{Status, UNKNOWN_VERSION};

const NAME: Style = Style::new().bold();
const VERSION: Style = AnsiColor::Green.on_default().bold();
const INSTALLED: Style = AnsiColor::Cyan.on_default().bold();
const POPULARITY: Style = AnsiColor::Blue.on_default().bold();
const ERROR: Style = AnsiColor::Red.on_default().bold();

fn paint(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

/// Renders one search result as its two display lines: the headline
/// and the indented description.
pub fn search_entry(row: &SearchRow) -> String {
    let candidate = &row.candidate;
    let mut line = paint(NAME, &candidate.name);

    match row.status() {
        // Fast mode: installed state only.
        None => {
            if let Some(installed) = &row.installed {
                line.push(' ');
                line.push_str(&paint(INSTALLED, &format!("[installed: {}]", installed)));
            }
        }
        Some(status) => {
            let remote = row
                .remote
                .as_ref()
                .and_then(|remote| remote.as_deref())
                .unwrap_or(UNKNOWN_VERSION);
            line.push(' ');
            line.push_str(&paint(VERSION, remote));

            let marker = match status {
                Status::UpToDate => Some("[installed]".to_string()),
                Status::Outdated | Status::UnknownRemote => row
                    .installed
                    .as_ref()
                    .map(|installed| format!("[installed: {}]", installed)),
                Status::NotInstalled => None,
            };
            if let Some(marker) = marker {
                line.push(' ');
                line.push_str(&paint(INSTALLED, &marker));
            }
        }
    }

    line.push(' ');
    line.push_str(&paint(POPULARITY, &format!("({})", candidate.popularity)));

    format!("{}\n\t{}", line, candidate.description)
}

/// Diagnostic line for fatal errors.
pub fn error_line(message: &str) -> String {
    paint(ERROR, message)
}
