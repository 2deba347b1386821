//! Listing-output scraping shared by the zellij and screen adapters.

use std::sync::OnceLock;

use regex::Regex;

fn ansi_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]").ok())
        .as_ref()
}

/// Remove CSI color/style escape sequences.
pub fn strip_ansi(text: &str) -> String {
    match ansi_pattern() {
        Some(pattern) => pattern.replace_all(text, "").into_owned(),
        None => text.to_string(),
    }
}

/// Session names from `zellij list-sessions`, one per non-blank line.
///
/// Lines look like `name [Created 2h ago] (EXITED ...)`, often colored; the
/// name is the first whitespace-separated field after stripping escapes.
pub(crate) fn zellij_session_names(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter_map(|line| {
            strip_ansi(line)
                .split_whitespace()
                .next()
                .map(str::to_string)
        })
        .collect()
}

/// One entry of `screen -ls`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScreenSession {
    /// `pid.name`, unique even when several sessions share a name.
    pub id: String,
    pub name: String,
}

/// Parse `screen -ls` output into sessions.
///
/// Only lines carrying an `(Attached)` or `(Detached)` marker are sessions;
/// headers and the socket summary line are skipped.
pub(crate) fn screen_sessions(listing: &str) -> Vec<ScreenSession> {
    listing
        .lines()
        .map(strip_ansi)
        .filter(|line| line.contains("(Attached)") || line.contains("(Detached)"))
        .filter_map(|line| {
            let id = line.split_whitespace().next()?.to_string();
            let (pid, name) = id.split_once('.')?;
            if pid.is_empty() || !pid.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let name = name.to_string();
            Some(ScreenSession { id, name })
        })
        .collect()
}
