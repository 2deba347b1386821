//! Application entry orchestration for the txm CLI.

use tracing::debug;

use txm::backend::{probe_availability, Availability};
use txm::config::{default_config_path, load_config, save_config, LoadedConfig};
use txm::install::current_installation;
use txm::mux::{adapter_for, CommandRunner, SystemRunner};
use txm::ui::RenderSink;

use crate::app::commands::config::{handle_config_command, ConfigContext};
use crate::app::commands::uninstall::handle_uninstall;
use crate::app::commands::version::{handle_update, handle_version};
use crate::app::dispatch::dispatch;
use crate::app::request::{request_from_command, MuxRequest, Request};
use crate::app::startup::{choose_backend, report_choice, report_config_diagnostics};
use crate::app::{AppError, HELP_TEXT};
use crate::cli::Command;

/// Validate `command` and run it to completion.
pub(crate) async fn run(
    command: Command,
    verbose: bool,
    sink: &dyn RenderSink,
) -> Result<(), AppError> {
    let request = request_from_command(command)?;
    debug!(?request, "parsed request");
    match request {
        Request::Help => {
            sink.plain(HELP_TEXT);
            Ok(())
        }
        Request::Version { check_update } => handle_version(check_update, sink).await,
        Request::Update => handle_update(sink).await,
        Request::Uninstall => handle_uninstall(&current_installation()?, sink),
        Request::Config(config_request) => {
            let loaded = load_config();
            report_config_diagnostics(&loaded, verbose, sink);
            let availability = probe_availability();
            let config_path = default_config_path();
            let ctx = ConfigContext {
                loaded: &loaded,
                availability: &availability,
                config_path: config_path.as_deref(),
            };
            handle_config_command(&config_request, &ctx, sink, save_config)
        }
        Request::Mux(mux_request) => {
            let loaded = load_config();
            let availability = probe_availability();
            run_mux(&mux_request, &loaded, &availability, &SystemRunner, verbose, sink)
        }
    }
}

/// Resolve the backend for this run and dispatch one multiplexer verb.
fn run_mux(
    request: &MuxRequest,
    loaded: &LoadedConfig,
    availability: &Availability,
    runner: &dyn CommandRunner,
    verbose: bool,
    sink: &dyn RenderSink,
) -> Result<(), AppError> {
    report_config_diagnostics(loaded, verbose, sink);
    let choice = choose_backend(&loaded.config, availability)?;
    report_choice(&choice, sink);
    let mux = adapter_for(choice.backend, runner);
    dispatch(mux.as_ref(), request, sink)
}
