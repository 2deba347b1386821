//! `txm config` handlers.
//!
//! Persistence is injected so the handler can be exercised without touching
//! the real home directory.

use std::path::{Path, PathBuf};

use txm::backend::{Availability, Backend};
use txm::config::{Config, ConfigSource, LoadedConfig, BACKEND_ENV_VAR};
use txm::error::ConfigError;
use txm::ui::RenderSink;

use crate::app::request::ConfigRequest;
use crate::app::AppError;

/// Inputs shared by every `config` action.
pub(crate) struct ConfigContext<'a> {
    pub loaded: &'a LoadedConfig,
    pub availability: &'a Availability,
    pub config_path: Option<&'a Path>,
}

pub(crate) fn handle_config_command<FSave>(
    request: &ConfigRequest,
    ctx: &ConfigContext<'_>,
    sink: &dyn RenderSink,
    save: FSave,
) -> Result<(), AppError>
where
    FSave: FnOnce(&Config) -> Result<PathBuf, ConfigError>,
{
    match request {
        ConfigRequest::SetBackend(backend) => set_backend(*backend, ctx, sink, save),
        ConfigRequest::GetBackend => {
            sink.plain(ctx.loaded.config.default_backend.as_str());
            Ok(())
        }
        ConfigRequest::Show => {
            show(ctx, sink);
            Ok(())
        }
    }
}

fn set_backend<FSave>(
    backend: Backend,
    ctx: &ConfigContext<'_>,
    sink: &dyn RenderSink,
    save: FSave,
) -> Result<(), AppError>
where
    FSave: FnOnce(&Config) -> Result<PathBuf, ConfigError>,
{
    let config = Config {
        default_backend: backend,
        ..ctx.loaded.config
    };
    let path = save(&config)?;
    sink.info(&format!("Default backend set to {backend}"));
    sink.field("saved_to", &path.display().to_string());
    if !ctx.availability.is_available(backend) {
        sink.warn(&format!(
            "{backend} is not installed. txm will fall back to another backend until it is."
        ));
    }
    if ctx.loaded.source == ConfigSource::Env {
        sink.warn(&format!(
            "{BACKEND_ENV_VAR} is set and takes precedence over the saved default"
        ));
    }
    Ok(())
}

fn show(ctx: &ConfigContext<'_>, sink: &dyn RenderSink) {
    let config = &ctx.loaded.config;
    let path = ctx
        .config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(home directory unavailable)".to_string());
    sink.field("config_path", &path);
    sink.field("source", &ctx.loaded.source.to_string());
    sink.field("default_backend", config.default_backend.as_str());
    let order: Vec<&str> = config.fallback_order.iter().map(|b| b.as_str()).collect();
    sink.field("fallback_order", &order.join(", "));
    for backend in Backend::ALL {
        let state = if ctx.availability.is_available(backend) {
            "installed"
        } else {
            "not installed"
        };
        sink.field(backend.as_str(), state);
    }
}
