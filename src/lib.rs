//! txm: one command set for tmux, zellij and GNU screen.
//!
//! The crate resolves which multiplexer to drive (configured default, then a
//! fixed fallback order over whatever is installed) and translates each
//! session, window and pane verb into that backend's command line.
//!
//! # Quick start
//!
//! ```no_run
//! use txm::backend::{probe_availability, select_best_backend};
//! use txm::config::load_config;
//! use txm::mux::{adapter_for, SystemRunner};
//!
//! let loaded = load_config();
//! let backend = select_best_backend(&loaded.config, &probe_availability());
//! let runner = SystemRunner;
//! let mux = adapter_for(backend, &runner);
//! mux.create_session("dev").unwrap();
//! ```

pub mod backend;
pub mod build_info;
pub mod config;
pub mod error;
pub mod install;
pub mod mux;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
pub mod update;
