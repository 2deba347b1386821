//! Backend resolution at startup.

use tracing::{debug, warn};

use txm::backend::{select_best_backend, Availability, Backend};
use txm::config::{Config, LoadedConfig};
use txm::ui::RenderSink;

use crate::app::AppError;

/// Backend chosen for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BackendChoice {
    pub backend: Backend,
    /// Configured default that was skipped because it is not installed.
    pub fell_back_from: Option<Backend>,
}

/// Pick the backend for this run, failing when nothing is installed.
pub(crate) fn choose_backend(
    config: &Config,
    availability: &Availability,
) -> Result<BackendChoice, AppError> {
    if !availability.any() {
        return Err(AppError::NoBackendAvailable);
    }
    let backend = select_best_backend(config, availability);
    let fell_back_from = (backend != config.default_backend).then_some(config.default_backend);
    debug!(%backend, ?fell_back_from, "backend chosen");
    Ok(BackendChoice {
        backend,
        fell_back_from,
    })
}

/// Warn when the configured default was not usable.
pub(crate) fn report_choice(choice: &BackendChoice, sink: &dyn RenderSink) {
    if let Some(default) = choice.fell_back_from {
        sink.warn(&format!(
            "{default} is not installed. Falling back to {}.",
            choice.backend
        ));
    }
}

/// Surface non-fatal config problems: on screen when verbose, else as tracing warnings.
pub(crate) fn report_config_diagnostics(
    loaded: &LoadedConfig,
    verbose: bool,
    sink: &dyn RenderSink,
) {
    for message in &loaded.diagnostics.warnings {
        if verbose {
            sink.warn(message);
        } else {
            warn!("{message}");
        }
    }
}
