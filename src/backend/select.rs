//! Backend choice for one invocation.

use tracing::debug;

use super::{Availability, Backend};
use crate::config::Config;

/// Pick the backend to drive for this run.
///
/// The configured default wins when installed; otherwise the first installed
/// entry of `config.fallback_order`. With nothing installed this returns
/// [`Backend::Tmux`] and the caller is expected to report that nothing usable
/// exists before spawning anything.
pub fn select_best_backend(config: &Config, availability: &Availability) -> Backend {
    if availability.is_available(config.default_backend) {
        debug!(backend = %config.default_backend, "using configured default backend");
        return config.default_backend;
    }
    if let Some(fallback) = config
        .fallback_order
        .iter()
        .copied()
        .find(|backend| availability.is_available(*backend))
    {
        debug!(
            configured = %config.default_backend,
            backend = %fallback,
            "configured backend unavailable; using fallback"
        );
        return fallback;
    }
    debug!("no backend binary found; defaulting to tmux");
    Backend::Tmux
}
