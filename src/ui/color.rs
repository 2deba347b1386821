//! Terminal color capability detection.

use std::io::IsTerminal;

use tracing::debug;

/// `TERM` prefixes treated as color-capable.
pub const COLOR_TERM_PREFIXES: [&str; 4] = ["xterm", "screen", "tmux", "linux"];

/// Detect color support from the process environment and stdout.
pub fn detect_color_support() -> bool {
    detect_color_support_with(|name| std::env::var(name).ok(), std::io::stdout().is_terminal())
}

/// Color detection over injected inputs.
///
/// Off when `NO_COLOR` is non-empty, when `TERM` is missing, or when stdout is
/// not a terminal; otherwise on only for the known `TERM` prefixes.
pub fn detect_color_support_with<F>(env_lookup: F, stdout_is_tty: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if env_lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        debug!("colors disabled by NO_COLOR");
        return false;
    }
    let Some(term) = env_lookup("TERM").filter(|t| !t.is_empty()) else {
        debug!("colors disabled: TERM is not set");
        return false;
    };
    if !stdout_is_tty {
        debug!("colors disabled: stdout is not a terminal");
        return false;
    }
    let supported = COLOR_TERM_PREFIXES
        .iter()
        .any(|prefix| term.starts_with(prefix));
    debug!(%term, supported, "color support detected from TERM");
    supported
}
