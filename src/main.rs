//! CLI entry point for txm.

mod app;
mod cli;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use txm::ui::{detect_color_support, RenderSink, Renderer};

use crate::app::HELP_TEXT;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp) => {
            println!("{HELP_TEXT}");
            return;
        }
        Err(err) => {
            let renderer = Renderer::new(detect_color_support());
            renderer.error(&first_line(&err.to_string()));
            println!("{HELP_TEXT}");
            std::process::exit(1);
        }
    };

    init_tracing(args.verbose);
    let renderer = Renderer::new(!args.no_color && detect_color_support());

    let Some(command) = args.command else {
        println!("{HELP_TEXT}");
        std::process::exit(1);
    };

    if let Err(err) = app::entry::run(command, args.verbose, &renderer).await {
        renderer.error(&err.to_string());
        if err.shows_help() {
            println!("{HELP_TEXT}");
        }
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `--verbose` default.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "txm=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// clap renders multi-line errors with its own usage block; keep the headline.
fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
